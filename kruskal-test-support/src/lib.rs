//! Shared test utilities for the kruskal workspace.
//!
//! [`tracing::RecordingLayer`] captures spans and events so instrumentation can
//! be asserted, and [`ci`] reads the environment overrides that tune property
//! test runs.

pub mod tracing {
    //! In-memory capture of spans and events.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    /// Field values keyed by field name, rendered as strings.
    pub type Fields = HashMap<String, String>;

    /// Layer keeping every closed span and emitted event.
    ///
    /// Clones share storage, so a test keeps one handle and installs another.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Closed spans, oldest first.
        ///
        /// # Examples
        /// ```
        /// use kruskal_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans.lock().expect("span store poisoned").clone()
        }

        /// Emitted events, oldest first.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events.lock().expect("event store poisoned").clone()
        }

        /// Runs `f` with this layer as the thread's default subscriber.
        ///
        /// # Examples
        /// ```
        /// use kruskal_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// layer.capture(|| tracing::info!(answer = 42, "done"));
        /// assert_eq!(layer.events()[0].field("answer"), Some("42"));
        /// ```
        pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
            let subscriber = tracing_subscriber::registry().with(self.clone());
            tracing::subscriber::with_default(subscriber, f)
        }

        /// First closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.spans().into_iter().find(|span| span.name == name)
        }

        /// First event whose message equals `message`.
        #[must_use]
        pub fn event_with_message(&self, message: &str) -> Option<EventRecord> {
            self.events()
                .into_iter()
                .find(|event| event.message() == Some(message))
        }
    }

    /// A closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from its metadata.
        pub name: String,
        /// Fields recorded at creation or later through `Span::record`.
        pub fields: Fields,
    }

    impl SpanRecord {
        /// Recorded value of `key`.
        #[must_use]
        pub fn field(&self, key: &str) -> Option<&str> {
            self.fields.get(key).map(String::as_str)
        }
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event fields, including `message`.
        pub fields: Fields,
    }

    impl EventRecord {
        /// Recorded value of `key`.
        #[must_use]
        pub fn field(&self, key: &str) -> Option<&str> {
            self.fields.get(key).map(String::as_str)
        }

        /// The formatted message, if the event has one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    // Stored in the span's extensions until it closes.
    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: Fields::new(),
            };
            attrs.record(&mut FieldRecorder(&mut record.fields));
            span.extensions_mut().insert(OpenSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
                self.spans.lock().expect("span store poisoned").push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldRecorder(&mut fields));
            let record = EventRecord {
                level: *event.metadata().level(),
                fields,
            };
            self.events.lock().expect("event store poisoned").push(record);
        }
    }

    // Integers, booleans and `%`-formatted values fall through to
    // `record_debug`, whose output matches `Display` for them.
    struct FieldRecorder<'a>(&'a mut Fields);

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }
    }
}

pub mod ci;
