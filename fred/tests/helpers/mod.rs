use std::sync::Arc;

use fred::Fred;
use fred_mock::MockFred;

/// A `Fred` over a fresh mock, plus the mock for call inspection.
pub fn fred_with_mock() -> (Fred, Arc<MockFred>) {
    let mock = Arc::new(MockFred::new());
    let fred = Fred::new(mock.clone());
    (fred, mock)
}
