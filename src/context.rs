//! Execution context carried by every client call: an optional deadline and
//! any number of cancel signals inherited from parent contexts.

use std::future::{Future, pending};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

use crate::error::{Error, Result};

/// Deadline and cancellation scope of a call.
///
/// Contexts are cheap to clone. Deriving a context with [`Context::with_cancel`]
/// or [`Context::with_timeout`] never affects the parent.
///
/// ```no_run
/// use std::time::Duration;
/// use celestia_node_client::{Context, NodeClient};
///
/// # async fn run() -> celestia_node_client::Result<()> {
/// let client = NodeClient::local()?;
/// let (ctx, canceller) = Context::background()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancel();
/// let head = client.head(&ctx).await?;
/// canceller.cancel();
/// println!("height {}", head.header.height);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    signals: Vec<watch::Receiver<bool>>,
}

/// Cancels the context returned alongside it by [`Context::with_cancel`] and
/// every context derived from that one.
#[derive(Debug, Clone)]
pub struct Canceller {
    sender: Arc<watch::Sender<bool>>,
}

impl Canceller {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that expires `timeout` from now, or at the inherited
    /// deadline if that comes first. A timeout too large to represent as an
    /// instant adds no deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Derive a context that expires at `deadline`, or at the inherited
    /// deadline if that comes first.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Derive a cancellable context.
    pub fn with_cancel(mut self) -> (Self, Canceller) {
        let (sender, receiver) = watch::channel(false);
        self.signals.push(receiver);
        let canceller = Canceller {
            sender: Arc::new(sender),
        };
        (self, canceller)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.signals.iter().any(|signal| *signal.borrow())
    }

    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= Instant::now())
    }

    /// Drive `call` to completion unless the context is cancelled or expires
    /// first, in which case `call` is dropped.
    pub(crate) async fn run<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if self.is_expired() {
            return Err(Error::DeadlineExceeded);
        }

        let expiry = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = any_cancelled(&self.signals) => Err(Error::Cancelled),
            _ = expiry => Err(Error::DeadlineExceeded),
            result = call => result,
        }
    }
}

/// Resolves once any signal reads `true`. A signal whose canceller was
/// dropped without cancelling never resolves.
fn any_cancelled(
    signals: &[watch::Receiver<bool>],
) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
    Box::pin(async move {
        match signals {
            [] => pending().await,
            [only] => cancelled(only.clone()).await,
            [first, rest @ ..] => {
                tokio::select! {
                    _ = cancelled(first.clone()) => {}
                    _ = any_cancelled(rest) => {}
                }
            }
        }
    })
}

async fn cancelled(mut signal: watch::Receiver<bool>) {
    loop {
        if *signal.borrow_and_update() {
            return;
        }
        if signal.changed().await.is_err() {
            pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    async fn slow_ok() -> Result<u32> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(1)
    }

    #[tokio::test]
    async fn background_runs_to_completion() {
        let ctx = Context::background();
        assert_eq!(ctx.run(async { Ok(7) }).await.unwrap(), 7);
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_context_fails_before_running() {
        let (ctx, canceller) = Context::background().with_cancel();
        canceller.cancel();
        assert!(ctx.is_cancelled());
        let polled = AtomicBool::new(false);
        let result = ctx
            .run(async {
                polled.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await;
        assert!(!polled.load(Ordering::SeqCst));
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_interrupts_running_call() {
        let (ctx, canceller) = Context::background().with_cancel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });
        assert!(matches!(ctx.run(slow_ok()).await, Err(Error::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_interrupts_running_call() {
        let ctx = Context::background().with_timeout(Duration::from_millis(50));
        assert!(matches!(
            ctx.run(slow_ok()).await,
            Err(Error::DeadlineExceeded)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_context_fails_before_running() {
        let ctx = Context::background().with_deadline(Instant::now());
        let polled = AtomicBool::new(false);
        let result = ctx
            .run(async {
                polled.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await;
        assert!(!polled.load(Ordering::SeqCst));
        assert!(matches!(result, Err(Error::DeadlineExceeded)));
    }

    #[tokio::test(start_paused = true)]
    async fn earliest_deadline_wins() {
        let now = Instant::now();
        let ctx = Context::background()
            .with_timeout(Duration::from_secs(1))
            .with_timeout(Duration::from_secs(30));
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn unrepresentable_timeout_adds_no_deadline() {
        let ctx = Context::background().with_timeout(Duration::MAX);
        assert!(ctx.deadline().is_none());
        assert_eq!(ctx.run(async { Ok(5) }).await.unwrap(), 5);

        let now = Instant::now();
        let ctx = Context::background()
            .with_timeout(Duration::from_secs(2))
            .with_timeout(Duration::MAX);
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn parent_cancel_reaches_child() {
        let (parent, parent_canceller) = Context::background().with_cancel();
        let (child, _child_canceller) = parent.clone().with_cancel();
        parent_canceller.cancel();
        assert!(child.is_cancelled());
        assert!(matches!(child.run(slow_ok()).await, Err(Error::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn child_cancel_leaves_parent_alone() {
        let (parent, _parent_canceller) = Context::background().with_cancel();
        let (child, child_canceller) = parent.clone().with_cancel();
        child_canceller.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
        assert_eq!(parent.run(async { Ok(3) }).await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_canceller_never_cancels() {
        let (ctx, canceller) = Context::background().with_cancel();
        drop(canceller);
        let ctx = ctx.with_timeout(Duration::from_secs(1));
        assert!(matches!(
            ctx.run(slow_ok()).await,
            Err(Error::DeadlineExceeded)
        ));
    }
}
