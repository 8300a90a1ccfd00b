mod state;
mod trace;

pub use state::AppState;
pub use trace::Trace;
