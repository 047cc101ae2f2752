/// Async seam between a [`crate::client::Node`] and the actual CAN
/// peripheral. The [`embedded-can`] traits are blocking, so drivers wrap
/// their hardware (or a mock bus, in tests) in this instead.
///
/// [`embedded-can`]: embedded_can
pub trait AsyncCan {
    type Error;

    type Frame: embedded_can::Frame;

    async fn send(&mut self, frame: Self::Frame) -> Result<(), Self::Error>;

    async fn receive(&mut self) -> Result<Self::Frame, Self::Error>;
}

impl<T> AsyncCan for &mut T
where
    T: AsyncCan,
{
    type Error = T::Error;
    type Frame = T::Frame;

    async fn send(&mut self, frame: Self::Frame) -> Result<(), Self::Error> {
        (*self).send(frame).await
    }

    async fn receive(&mut self) -> Result<Self::Frame, Self::Error> {
        (*self).receive().await
    }
}
