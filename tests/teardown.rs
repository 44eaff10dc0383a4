//! Session teardown

use firebird_wire::test_utils::{init_tracing, Call, Fault, MockConnector, MOCK_DATABASE};
use firebird_wire::{
    Error, IsolationLevel, Session, SessionConfig, Transaction, TransactionHandle, Value,
};
use futures::FutureExt;
use std::collections::HashMap;
use tokio_test::{assert_err, assert_ok};

fn config() -> SessionConfig {
    SessionConfig::builder("localhost:3050", "employee", "SYSDBA")
        .password("masterkey")
        .build()
}

#[tokio::test]
async fn test_close_rolls_back_default_transaction() {
    init_tracing();
    let connector = MockConnector::new();
    let session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.clear_calls();

    assert_ok!(session.close().await);

    assert_eq!(
        connector.calls(),
        vec![
            Call::Rollback(TransactionHandle(1)),
            Call::Response,
            Call::Detach(MOCK_DATABASE),
            Call::Response,
            Call::CloseTransport,
        ]
    );
}

#[tokio::test]
async fn test_close_rolls_back_transaction_behind_open_cursor() {
    let connector = MockConnector::new()
        .result_set(["ID"], vec![vec![Value::Int(1)], vec![Value::Int(2)]]);
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let tx = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    let mut cursor = assert_ok!(session.query("SELECT ID FROM T", &[]).await);
    connector.clear_calls();

    assert_ok!(session.close().await);

    assert_eq!(
        connector.requests(),
        vec![
            Call::Rollback(TransactionHandle(1)),
            Call::Rollback(tx.handle()),
            Call::Detach(MOCK_DATABASE),
            Call::CloseTransport,
        ]
    );

    let err = assert_err!(cursor.next().await);
    assert!(matches!(err, Error::ConnectionClosed));
}

#[tokio::test]
async fn test_every_handle_resolved_exactly_once() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let a = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    let _b = assert_ok!(session.begin(IsolationLevel::Serializable).await);
    assert_ok!(session.exec("UPDATE t SET a = 1", &[]).await);
    assert_ok!(session.commit(&a).await);
    let _c = assert_ok!(session.begin(IsolationLevel::RepeatableRead).await);

    assert_ok!(session.close().await);

    let mut resolved: HashMap<TransactionHandle, usize> = HashMap::new();
    for handle in connector.commits().into_iter().chain(connector.rollbacks()) {
        *resolved.entry(handle).or_default() += 1;
    }
    let begun = connector.begun();
    assert_eq!(begun.len(), 4);
    for handle in begun {
        assert_eq!(resolved.get(&handle), Some(&1), "handle {}", handle);
    }
}

#[tokio::test]
async fn test_release_happens_even_when_every_rollback_fails() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    connector.inject(Fault::RollbackResponse);

    let err = assert_err!(session.close().await);

    let errors = err.teardown_errors();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| matches!(e, Error::Transaction(_))));
    assert_eq!(connector.rollbacks().len(), 3);
    assert_eq!(connector.count(|c| matches!(c, Call::Detach(_))), 1);
    assert_eq!(connector.transport_releases(), 1);
}

#[tokio::test]
async fn test_teardown_errors_keep_step_order() {
    let connector = MockConnector::new()
        .fail(Fault::DetachResponse)
        .fail(Fault::CloseTransport);
    let session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.inject(Fault::RollbackResponse);

    let err = assert_err!(session.close().await);

    match &err {
        Error::Teardown(errors) => {
            assert_eq!(errors.len(), 3);
            assert!(matches!(errors[0], Error::Transaction(_)));
            assert!(matches!(errors[1], Error::Server(_)));
            assert!(matches!(errors[2], Error::Io(_)));
        }
        other => panic!("expected teardown error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("session teardown failed (3 error(s))"));
    assert_eq!(connector.transport_releases(), 1);
}

#[tokio::test]
async fn test_close_after_resolving_everything_only_detaches() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    assert_ok!(session.commit_current().await);
    connector.clear_calls();

    assert_ok!(session.close().await);

    assert_eq!(
        connector.requests(),
        vec![Call::Detach(MOCK_DATABASE), Call::CloseTransport]
    );
}

#[tokio::test]
async fn test_close_after_abandoned_autocommit_reads_pending_response() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.slow_responses(true);
    connector.clear_calls();

    assert!(session.exec("UPDATE t SET a = 1", &[]).now_or_never().is_none());
    assert_eq!(connector.commits(), vec![TransactionHandle(1)]);

    assert_ok!(session.close().await);

    assert_eq!(
        connector.requests(),
        vec![
            Call::Prepare {
                sql: "UPDATE t SET a = 1".into(),
                transaction: TransactionHandle(1),
            },
            Call::Execute("UPDATE t SET a = 1".into()),
            Call::Commit(TransactionHandle(1)),
            Call::Detach(MOCK_DATABASE),
            Call::CloseTransport,
        ]
    );
    assert_eq!(connector.count(|c| *c == Call::Response), 2);
    assert!(connector.rollbacks().is_empty());
}

#[tokio::test]
async fn test_exec_after_abandoned_autocommit_stays_in_step() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.slow_responses(true);

    assert!(session.exec("UPDATE t SET a = 1", &[]).now_or_never().is_none());
    assert_ok!(session.exec("UPDATE t SET a = 2", &[]).await);

    assert_eq!(
        connector.commits(),
        vec![TransactionHandle(1), TransactionHandle(2)]
    );
    assert!(session.open_transactions().is_empty());

    assert_ok!(session.close().await);
    assert!(connector.rollbacks().is_empty());
}

#[tokio::test]
async fn test_close_rolls_back_transaction_from_abandoned_begin() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.slow_responses(true);

    assert!(session
        .begin(IsolationLevel::Serializable)
        .now_or_never()
        .is_none());

    assert_ok!(session.close().await);

    assert_eq!(connector.begun(), vec![TransactionHandle(1), TransactionHandle(2)]);
    assert_eq!(
        connector.rollbacks(),
        vec![TransactionHandle(1), TransactionHandle(2)]
    );
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Begin,
    Exec,
    CommitCurrent,
    RollbackCurrent,
    RollbackOldest,
}

/// Run `steps`, close, and check every begun handle was resolved once
async fn run_and_close(steps: &[Step]) {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let mut explicit: Vec<Transaction> = Vec::new();

    for step in steps {
        match step {
            Step::Begin => {
                explicit.push(assert_ok!(session.begin(IsolationLevel::ReadCommitted).await));
            }
            Step::Exec => {
                assert_ok!(session.exec("UPDATE t SET a = a + 1", &[]).await);
            }
            Step::CommitCurrent => assert_ok!(session.commit_current().await),
            Step::RollbackCurrent => assert_ok!(session.rollback_current().await),
            Step::RollbackOldest => {
                let oldest = explicit
                    .iter()
                    .position(|t| session.open_transactions().contains(t.handle()))
                    .map(|i| explicit.remove(i));
                if let Some(transaction) = oldest {
                    assert_ok!(session.rollback(&transaction).await);
                }
            }
        }
    }

    assert_ok!(session.close().await);

    let mut resolved: HashMap<TransactionHandle, usize> = HashMap::new();
    for handle in connector.commits().into_iter().chain(connector.rollbacks()) {
        *resolved.entry(handle).or_default() += 1;
    }
    let begun = connector.begun();
    assert_eq!(resolved.len(), begun.len(), "{:?}", steps);
    for handle in begun {
        assert_eq!(resolved.get(&handle), Some(&1), "handle {} in {:?}", handle, steps);
    }
}

#[tokio::test]
async fn test_every_handle_resolved_once_across_sequences() {
    use Step::*;

    run_and_close(&[RollbackCurrent, Begin, Begin, CommitCurrent, Begin, RollbackOldest]).await;
    run_and_close(&[CommitCurrent, Exec, Exec, Begin, Exec]).await;
    run_and_close(&[Exec, Begin, Exec, RollbackOldest, Exec, Begin]).await;
    run_and_close(&[
        Begin,
        RollbackOldest,
        Exec,
        Begin,
        RollbackCurrent,
        Exec,
        Begin,
        CommitCurrent,
    ])
    .await;
}
