//! Order progress stepper model
//!
//! A single mapping from [`OrderStatus`] to the list of stepper entries.
//! Both the vertical and the horizontal templates in the frontend render the
//! output of [`order_progress`], so the two can never disagree.

use super::aggregate::OrderStatus;

/// Linear milestones, in fulfilment order
pub const ORDER_MILESTONES: [OrderStatus; 4] = [
    OrderStatus::Paid,
    OrderStatus::InPreparation,
    OrderStatus::Sent,
    OrderStatus::Delivered,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl StepState {
    /// CSS modifier used by both templates
    pub fn css_modifier(&self) -> &'static str {
        match self {
            StepState::Completed => "completed",
            StepState::Active => "active",
            StepState::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    /// 1-based position shown inside the step marker
    pub number: usize,
    pub status: OrderStatus,
    pub label: String,
    pub state: StepState,
    /// Segment before the marker is filled (never set for the first step)
    pub leading_done: bool,
    /// Segment after the marker is filled (never set for the last step)
    pub trailing_done: bool,
}

impl ProgressStep {
    /// Step is at or before the current milestone
    pub fn is_reached(&self) -> bool {
        matches!(self.state, StepState::Completed | StepState::Active)
    }
}

/// What the progress area shows for a status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderProgress {
    Canceled,
    ReturnRequested,
    Steps(Vec<ProgressStep>),
}

/// Status used for the stepper: return states sit on DELIVERED
pub fn display_status(status: OrderStatus) -> OrderStatus {
    match status {
        OrderStatus::ReturnRequest | OrderStatus::ReturnAccepted => OrderStatus::Delivered,
        other => other,
    }
}

/// Position of the status in [`ORDER_MILESTONES`]; `None` for CANCELED
pub fn current_step_index(status: OrderStatus) -> Option<usize> {
    let shown = display_status(status);
    if !shown.is_milestone() {
        return None;
    }
    ORDER_MILESTONES.iter().position(|s| *s == shown)
}

/// Stepper entries for a status
///
/// For CANCELED every step is pending; callers normally go through
/// [`order_progress`] which replaces the stepper with a notice.
pub fn progress_steps(status: OrderStatus) -> Vec<ProgressStep> {
    let current = current_step_index(status);
    let last = ORDER_MILESTONES.len() - 1;

    ORDER_MILESTONES
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let state = match current {
                Some(c) if index < c => StepState::Completed,
                Some(c) if index == c => StepState::Active,
                _ => StepState::Pending,
            };
            let reached = |limit_inclusive: bool| match current {
                Some(c) if limit_inclusive => index <= c,
                Some(c) => index < c,
                None => false,
            };
            ProgressStep {
                number: index + 1,
                status: *step,
                label: step.label(),
                state,
                leading_done: index != 0 && reached(true),
                trailing_done: index != last && reached(false),
            }
        })
        .collect()
}

/// Progress area content for a status
pub fn order_progress(status: OrderStatus) -> OrderProgress {
    match status {
        OrderStatus::Canceled => OrderProgress::Canceled,
        OrderStatus::ReturnRequest => OrderProgress::ReturnRequested,
        other => OrderProgress::Steps(progress_steps(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_index_matches_position() {
        for (position, status) in ORDER_MILESTONES.iter().enumerate() {
            assert!(status.is_milestone());
            assert_eq!(current_step_index(*status), Some(position));

            let steps = progress_steps(*status);
            assert_eq!(steps.len(), ORDER_MILESTONES.len());
            for step in &steps[..position] {
                assert_eq!(step.state, StepState::Completed, "{:?}", status);
            }
            assert_eq!(steps[position].state, StepState::Active);
            assert!(steps[..=position].iter().all(ProgressStep::is_reached));
            assert!(steps[position + 1..]
                .iter()
                .all(|s| s.state == StepState::Pending));
        }
    }

    #[test]
    fn test_return_states_map_to_delivered() {
        let delivered = progress_steps(OrderStatus::Delivered);
        assert_eq!(progress_steps(OrderStatus::ReturnRequest), delivered);
        assert_eq!(progress_steps(OrderStatus::ReturnAccepted), delivered);
        assert!(delivered.iter().all(ProgressStep::is_reached));
        assert_eq!(current_step_index(OrderStatus::ReturnAccepted), Some(3));
    }

    #[test]
    fn test_return_accepted_renders_delivered_stepper() {
        assert_eq!(
            order_progress(OrderStatus::ReturnAccepted),
            order_progress(OrderStatus::Delivered)
        );
    }

    #[test]
    fn test_side_states_replace_stepper() {
        assert_eq!(order_progress(OrderStatus::Canceled), OrderProgress::Canceled);
        assert_eq!(
            order_progress(OrderStatus::ReturnRequest),
            OrderProgress::ReturnRequested
        );
        assert!(!OrderStatus::Canceled.is_milestone());
        assert_eq!(current_step_index(OrderStatus::Canceled), None);
    }

    #[test]
    fn test_connectors() {
        let steps = progress_steps(OrderStatus::Sent);
        let leading: Vec<bool> = steps.iter().map(|s| s.leading_done).collect();
        let trailing: Vec<bool> = steps.iter().map(|s| s.trailing_done).collect();
        assert_eq!(leading, vec![false, true, true, false]);
        assert_eq!(trailing, vec![true, true, false, false]);
    }

    #[test]
    fn test_step_labels_and_numbers() {
        let steps = progress_steps(OrderStatus::Paid);
        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["PAID", "IN PREPARATION", "SENT", "DELIVERED"]);
        assert_eq!(steps[3].number, 4);
    }
}
