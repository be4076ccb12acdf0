mod builder;
mod defaults;

pub use builder::build_config;
