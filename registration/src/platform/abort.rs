use tokio::sync::watch::{channel, Receiver, Sender};

/// Lets the caller abort a pending platform prompt.
#[derive(Clone, Debug)]
pub struct AbortController {
    request: Sender<bool>,
}

impl AbortController {
    pub fn init() -> AbortController {
        let (request, _) = channel(false);

        AbortController { request }
    }

    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            aborted: self.request.subscribe(),
        }
    }

    pub fn abort(&self) {
        self.request.send_replace(true);
    }
}

#[derive(Clone, Debug)]
pub struct AbortSignal {
    aborted: Receiver<bool>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        *self.aborted.borrow()
    }

    /// Resolves once `abort` was called. Pends forever if the controller is
    /// dropped without aborting.
    pub async fn aborted(&mut self) {
        let aborted = self.aborted.wait_for(|aborted| *aborted).await.is_ok();

        if !aborted {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn abort() -> Result<(), Box<dyn std::error::Error>> {
        let test_controller = AbortController::init();
        let mut test_signal = test_controller.signal();

        assert!(!test_signal.is_aborted());

        let test_waiter = tokio::spawn(async move {
            test_signal.aborted().await;
        });

        test_controller.abort();

        timeout(Duration::from_secs(5), test_waiter).await??;

        Ok(())
    }

    #[tokio::test]
    async fn aborted_before_subscribe() -> Result<(), Box<dyn std::error::Error>> {
        let test_controller = AbortController::init();

        test_controller.abort();

        let mut test_signal = test_controller.signal();

        assert!(test_signal.is_aborted());

        timeout(Duration::from_secs(5), test_signal.aborted()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn dropped_controller() -> Result<(), Box<dyn std::error::Error>> {
        let test_controller = AbortController::init();
        let mut test_signal = test_controller.signal();

        drop(test_controller);

        assert!(!test_signal.is_aborted());
        assert!(
            timeout(Duration::from_millis(50), test_signal.aborted())
                .await
                .is_err()
        );

        Ok(())
    }
}
