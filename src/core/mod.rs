pub mod kinematics;
pub mod playback;
pub mod window;
