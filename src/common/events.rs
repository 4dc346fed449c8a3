/// Sự kiện từ các timer nền gửi lên controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Tin nhắn giả lập từ bot đến hạn.
    InboundTick,
    /// Hết thời gian chờ của lần gõ phím có generation tương ứng.
    TypingElapsed(u64),
}
