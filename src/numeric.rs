pub mod arithmetic;
pub mod operator;
