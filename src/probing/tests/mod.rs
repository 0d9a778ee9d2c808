mod error;
mod model;
