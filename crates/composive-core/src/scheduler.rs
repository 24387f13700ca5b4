/// Asks the host UI framework for another render pass.
///
/// Implementations must be safe to share across threads; the request itself
/// only needs to be coalesced, not executed immediately.
pub trait RenderScheduler: Send + Sync {
    fn schedule_render(&self);
}

/// Scheduler that drops every request, for hosts that render continuously.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderScheduler;

impl RenderScheduler for NoopRenderScheduler {
    fn schedule_render(&self) {}
}
