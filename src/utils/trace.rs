/// Emit a `tracing` event at trace level when the `tracing` feature is
/// enabled. Expands to nothing otherwise; arguments are not evaluated.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace;

#[cfg(all(test, feature = "tracing"))]
mod test {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use futures_lite::future::block_on;
    use futures_lite::{stream, StreamExt as _};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    use crate::prelude::*;
    use crate::signal;

    /// Collects the message of every event.
    #[derive(Clone, Default)]
    struct Messages(Arc<Mutex<Vec<String>>>);

    impl Messages {
        fn contains(&self, message: &str) -> bool {
            self.0.lock().unwrap().iter().any(|m| m == message)
        }
    }

    struct MessageVisitor(Option<String>);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{value:?}"));
            }
        }
    }

    impl Subscriber for Messages {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if let Some(message) = visitor.0 {
                self.0.lock().unwrap().push(message);
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    #[test]
    fn emits_lifecycle_events() {
        let messages = Messages::default();
        tracing::subscriber::with_default(messages.clone(), || {
            block_on(async {
                let (trigger, cancel) = signal::signal();
                let mut s = vec![stream::repeat(1)].fan_in(cancel.clone());
                assert_eq!(s.next().await, Some(1));
                trigger.fire();
                assert_eq!(s.next().await, None);

                let out: Vec<_> = stream::iter(0..2).or_done(cancel).collect().await;
                assert!(out.is_empty());

                let (_first, never) = signal::signal();
                let (second, fires) = signal::signal();
                second.fire();
                vec![never, fires].or().await;
            })
        });

        assert!(messages.contains("signal fired"));
        assert!(messages.contains("fan_in: cancelled"));
        assert!(messages.contains("or_done: cancelled"));
        assert!(messages.contains("or: level of two completed"));
    }
}
