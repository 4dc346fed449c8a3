use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::common::TimerEvent;

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Quản lý các timer nền: tin nhắn bot định kỳ và reset cờ "đang gõ".
///
/// Mỗi timer là một tokio task chỉ gửi `TimerEvent` qua channel; mọi thay
/// đổi trạng thái vẫn diễn ra trên luồng UI khi controller gọi `pump`.
pub struct Scheduler {
    runtime: Handle,
    event_sender: mpsc::Sender<TimerEvent>,
    inbound: Option<JoinHandle<()>>,
    typing_reset: Option<JoinHandle<()>>,
    typing_generation: u64,
}

impl Scheduler {
    pub fn new(runtime: Handle) -> (Self, mpsc::Receiver<TimerEvent>) {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let scheduler = Self {
            runtime,
            event_sender,
            inbound: None,
            typing_reset: None,
            typing_generation: 0,
        };
        (scheduler, event_receiver)
    }

    /// Lần tick đầu tiên xảy ra sau đúng một `period`.
    pub fn start_inbound(&mut self, period: Duration) {
        if let Some(handle) = self.inbound.take() {
            handle.abort();
        }

        let sender = self.event_sender.clone();
        self.inbound = Some(self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if sender.send(TimerEvent::InboundTick).await.is_err() {
                    log::debug!("Inbound timer stopped: controller gone");
                    break;
                }
            }
        }));
    }

    /// Hủy reset đang chờ (nếu có) rồi đặt lại. Trả về generation mới.
    pub fn schedule_typing_reset(&mut self, delay: Duration) -> u64 {
        self.cancel_typing_reset();

        let generation = self.typing_generation;
        let sender = self.event_sender.clone();
        self.typing_reset = Some(self.runtime.spawn(async move {
            time::sleep(delay).await;
            // Controller đã bị hủy thì bỏ qua
            let _ = sender.send(TimerEvent::TypingElapsed(generation)).await;
        }));
        generation
    }

    /// Tăng generation để `TypingElapsed` đã nằm trong channel trở nên cũ.
    pub fn cancel_typing_reset(&mut self) {
        if let Some(handle) = self.typing_reset.take() {
            handle.abort();
        }
        self.typing_generation += 1;
    }

    pub fn typing_generation(&self) -> u64 {
        self.typing_generation
    }

    pub fn shutdown(&mut self) {
        if let Some(handle) = self.inbound.take() {
            handle.abort();
            log::debug!("Inbound timer cancelled");
        }
        if let Some(handle) = self.typing_reset.take() {
            handle.abort();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn inbound_first_tick_after_one_period() {
        let (mut scheduler, mut events) = Scheduler::new(Handle::current());
        scheduler.start_inbound(Duration::from_millis(10_000));

        time::sleep(Duration::from_millis(9_900)).await;
        assert!(events.try_recv().is_err());

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(events.try_recv(), Ok(TimerEvent::InboundTick));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduled_reset_only_delivers_latest_generation() {
        let (mut scheduler, mut events) = Scheduler::new(Handle::current());
        let first = scheduler.schedule_typing_reset(Duration::from_millis(1_500));
        time::sleep(Duration::from_millis(1_000)).await;
        let second = scheduler.schedule_typing_reset(Duration::from_millis(1_500));
        assert_ne!(first, second);

        time::sleep(Duration::from_millis(1_000)).await;
        assert!(events.try_recv().is_err());

        time::sleep(Duration::from_millis(600)).await;
        assert_eq!(events.try_recv(), Ok(TimerEvent::TypingElapsed(second)));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_scheduler_closes_channel() {
        let (mut scheduler, mut events) = Scheduler::new(Handle::current());
        scheduler.start_inbound(Duration::from_millis(10_000));
        scheduler.schedule_typing_reset(Duration::from_millis(1_500));

        drop(scheduler);
        assert_eq!(events.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_inbound_ticks() {
        let (mut scheduler, mut events) = Scheduler::new(Handle::current());
        scheduler.start_inbound(Duration::from_millis(10_000));
        scheduler.shutdown();

        time::sleep(Duration::from_millis(30_000)).await;
        assert!(events.try_recv().is_err());
    }
}
