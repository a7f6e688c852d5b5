mod context;

pub use context::AppContext;
