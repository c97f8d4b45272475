pub mod errors;
pub mod interestingness;
pub mod limits;
pub mod request;
pub mod search;
