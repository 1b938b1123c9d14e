use crate::error::BlogError;

/// Lifecycle of one query, driving what the view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Nothing requested yet.
    Idle,
    /// First load in progress; there is no data to show.
    Loading,
    /// Data available. `refreshing` is set while a refetch runs behind it.
    Success { data: T, refreshing: bool },
    Error(BlogError),
}

impl<T> QueryState<T> {
    /// Move into the pending state. Existing data stays visible.
    pub fn begin(&mut self) {
        match self {
            QueryState::Success { refreshing, .. } => *refreshing = true,
            _ => *self = QueryState::Loading,
        }
    }

    pub fn settle(&mut self, result: Result<T, BlogError>) {
        *self = match result {
            Ok(data) => QueryState::Success {
                data,
                refreshing: false,
            },
            Err(e) => QueryState::Error(e),
        };
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_keeps_data_while_refreshing() {
        let mut state = QueryState::Idle;
        state.begin();
        assert!(state.is_loading());

        state.settle(Ok(vec![1, 2]));
        state.begin();
        assert_eq!(
            state,
            QueryState::Success {
                data: vec![1, 2],
                refreshing: true
            }
        );
    }

    #[test]
    fn failed_refetch_replaces_data_with_error() {
        let mut state = QueryState::Success {
            data: 1,
            refreshing: true,
        };
        state.settle(Err(BlogError::Network("refused".into())));
        assert!(matches!(state, QueryState::Error(BlogError::Network(_))));
        assert_eq!(state.data(), None);
    }
}
