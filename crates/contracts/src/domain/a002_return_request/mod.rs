pub mod aggregate;

pub use aggregate::{
    is_valid_email, return_label_file_name, CreateReturnRequest, ReturnRequestForm,
    ReturnValidationError, RETURN_LABEL_MIME,
};
