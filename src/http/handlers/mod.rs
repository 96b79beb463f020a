pub mod feedback;

pub use feedback::{
    create_feedback_handler, delete_feedback_handler, get_owner_feedback_handler,
    update_feedback_handler,
};
