//! Span definitions for vote loading and vote attempts.

/// Create a span covering one vote attempt on an item.
#[macro_export]
macro_rules! vote_span {
    ($item_id:expr, $kind:expr) => {
        tracing::info_span!("truthlens.vote", item_id = %$item_id, kind = %$kind)
    };
}

/// Create a span covering an item load from the store.
#[macro_export]
macro_rules! load_span {
    ($item_id:expr) => {
        tracing::info_span!("truthlens.load", item_id = %$item_id)
    };
}
