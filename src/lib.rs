pub mod context;
pub mod expression;
pub mod schema;
pub mod value;
