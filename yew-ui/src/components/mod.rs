pub mod header;
pub mod leave_warning_modal;
pub mod notepad;
pub mod video_call;
pub mod video_control_buttons;
