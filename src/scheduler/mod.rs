pub mod event_lifecycle;
