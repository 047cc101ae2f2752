//! Bus client: one [`Node`] per board.
//!
//! A node owns the CAN driver and the board's fixed identity. Other tasks
//! queue outgoing frames through a [`NodeHandle`]; the node stamps its
//! identity into each one before it goes out, so senders never compose
//! their own identifiers.

#[cfg(feature = "defmt")]
use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    zerocopy_channel::{Channel, Receiver, Sender},
};

use crate::{types::BoardId, CanFrame, Message};

mod async_can;

pub use async_can::AsyncCan;

/// Drives one board's bus connection. See the
/// [module-level documentation](self).
pub struct Node<'ch, C: AsyncCan> {
    board: BoardId,
    can: C,
    rx: Receiver<'ch, CriticalSectionRawMutex, CanFrame>,
}

/// Queues outgoing frames for a [`Node`] from other tasks.
pub struct NodeHandle<'ch> {
    tx: Sender<'ch, CriticalSectionRawMutex, CanFrame>,
}

async fn receive_frame<C>(mut can: C) -> Result<Option<CanFrame>, C::Error>
where
    C: AsyncCan,
{
    let frame = can.receive().await?;

    Ok(CanFrame::from_can_frame(&frame))
}

impl<'ch, C: AsyncCan> Node<'ch, C> {
    pub fn new(
        board: BoardId,
        can: C,
        channel: &'ch mut Channel<'_, CriticalSectionRawMutex, CanFrame>,
    ) -> (Self, NodeHandle<'ch>) {
        let (tx, rx) = channel.split();

        let node = Self::from_receiver(board, can, rx);
        let handle = NodeHandle { tx };

        (node, handle)
    }

    pub fn from_receiver(
        board: BoardId,
        can: C,
        rx: Receiver<'ch, CriticalSectionRawMutex, CanFrame>,
    ) -> Self {
        Self { board, can, rx }
    }

    /// The identity stamped on outgoing frames.
    #[must_use]
    pub fn board(&self) -> BoardId {
        self.board
    }

    /// Drive the node: transmit queued frames under this board's identity
    /// and return the next frame seen on the bus.
    ///
    /// Non-catalogue traffic (extended identifiers, remote frames) is
    /// dropped here rather than handed to the caller.
    pub async fn poll(&mut self) -> Result<CanFrame, C::Error> {
        loop {
            match select(self.rx.receive(), receive_frame(&mut self.can)).await {
                Either::First(frame) => {
                    frame.id = frame.id.with_board(self.board);

                    #[cfg(feature = "defmt")]
                    info!("sending frame {}", frame);

                    self.can.send(frame.to_can_frame()).await?;
                    self.rx.receive_done();
                }
                Either::Second(res) => {
                    if let Some(frame) = res? {
                        return Ok(frame);
                    }
                }
            }
        }
    }
}

impl NodeHandle<'_> {
    /// Queue a frame for transmission. The node overwrites its board bits,
    /// so the identifier's board half is a placeholder.
    pub async fn send(&mut self, frame: CanFrame) {
        *self.tx.send().await = frame;
        self.tx.send_done();
    }

    /// Encode a message and queue it.
    pub async fn send_message<T: Message>(&mut self, msg: &T) {
        self.send(msg.encode(BoardId::Any)).await;
    }
}
