pub mod aggregate;
pub mod progress;

pub use aggregate::{
    product_image, AnonymousOrderLookup, MyOrdersPage, OrderAction, OrderDetails, OrderId, OrderItem, OrderStatus,
    ProductSection,
};
pub use progress::{
    current_step_index, display_status, order_progress, progress_steps, OrderProgress,
    ProgressStep, StepState, ORDER_MILESTONES,
};
