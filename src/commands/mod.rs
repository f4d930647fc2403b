/// Command implementations. `ghpp` has a single pipeline: `show`.
pub mod show;

pub use show::run;
