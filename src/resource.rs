//! Three-state result of an asynchronous load.
//!
//! Pages that fetch on mount hold a `Resource` and render a spinner, the
//! data, or the error message from it.

use std::fmt::Display;
use std::future::Future;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resource<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Resource<T> {
    /// Drive `future` to completion and record its outcome.
    pub async fn load<F, E>(future: F) -> Resource<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        match future.await {
            Ok(value) => Resource::Ready(value),
            Err(e) => {
                warn!("Load failed: {}", e);
                Resource::Failed(e.to_string())
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Resource::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Pending => Resource::Pending,
            Resource::Ready(value) => Resource::Ready(f(value)),
            Resource::Failed(message) => Resource::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let resource: Resource<u32> = Resource::default();
        assert!(resource.is_pending());
        assert_eq!(resource.value(), None);
        assert_eq!(resource.error(), None);
    }

    #[tokio::test]
    async fn test_load_success() {
        let resource = Resource::load(async { Ok::<_, String>(vec![1, 2, 3]) }).await;
        assert_eq!(resource.value(), Some(&vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_message() {
        let resource: Resource<u32> = Resource::load(async { Err("An error occurred") }).await;
        assert_eq!(resource.error(), Some("An error occurred"));
        assert!(!resource.is_pending());
    }

    #[test]
    fn test_map() {
        assert_eq!(Resource::Ready(2).map(|n| n * 10), Resource::Ready(20));
        assert_eq!(
            Resource::<u32>::Failed("x".to_string()).map(|n| n + 1),
            Resource::Failed("x".to_string())
        );
    }
}
