mod modal;

pub use modal::ReturnRequestModal;
