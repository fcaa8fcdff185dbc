pub mod a001_order;
pub mod a002_return_request;
