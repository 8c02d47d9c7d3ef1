use crate::domain::model::CopyStep;

pub trait ConfigProvider: Send + Sync {
    fn ros_root(&self) -> &str;
    fn stack_root(&self) -> &str;
    fn copy_steps(&self) -> &[CopyStep];
}
