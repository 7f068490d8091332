use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use tokio::signal::unix::{self, Signal, SignalKind};

/// Resolves once the process is asked to shut down. Drives the graceful
/// shutdown of the server loop.
///
/// On unix this listens for SIGINT, SIGTERM and SIGQUIT; elsewhere only
/// ctrl-c is available.
pub struct SignalHandler {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[Signal; 3]>,
    #[cfg(not(unix))]
    signals: BoxFuture<'static, std::io::Result<()>>,
}

#[cfg(unix)]
fn listen(kind: SignalKind) -> Option<Signal> {
    match unix::signal(kind) {
        Ok(signal) => Some(signal),
        Err(error) => {
            // a missing listener degrades shutdown, it does not break startup
            error!("failed to listen for signal {:?}: {}", kind, error);
            None
        }
    }
}

impl SignalHandler {
    pub fn new() -> Self {
        trace!("installing shutdown signal listeners");

        #[cfg(unix)]
        {
            let signals = [
                SignalKind::interrupt(),
                SignalKind::terminate(),
                SignalKind::quit(),
            ]
            .into_iter()
            .filter_map(listen)
            .collect();

            SignalHandler { signals }
        }

        #[cfg(not(unix))]
        {
            SignalHandler {
                signals: Box::pin(tokio::signal::ctrl_c()),
            }
        }
    }
}

impl Future for SignalHandler {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        {
            for signal in &mut self.signals {
                if signal.poll_recv(cx).is_ready() {
                    return Poll::Ready(());
                }
            }
        }

        #[cfg(not(unix))]
        {
            if self.signals.as_mut().poll(cx).is_ready() {
                return Poll::Ready(());
            }
        }

        Poll::Pending
    }
}
