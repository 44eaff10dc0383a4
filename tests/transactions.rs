//! Transaction coordination

use firebird_wire::test_utils::{init_tracing, Call, Fault, MockConnector};
use firebird_wire::{Error, IsolationLevel, Session, SessionConfig, TransactionHandle};
use tokio_test::{assert_err, assert_ok};

fn config() -> SessionConfig {
    SessionConfig::builder("localhost:3050", "employee", "SYSDBA")
        .password("masterkey")
        .build()
}

fn manual_config() -> SessionConfig {
    SessionConfig::builder("localhost:3050", "employee", "SYSDBA")
        .password("masterkey")
        .autocommit(false)
        .build()
}

#[tokio::test]
async fn test_begin_replaces_current_without_closing_prior() {
    init_tracing();
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);

    let tx = assert_ok!(session.begin(IsolationLevel::Serializable).await);

    assert_eq!(tx.handle(), TransactionHandle(2));
    assert!(!tx.is_autocommit());
    assert_eq!(session.current_transaction(), Some(&tx));
    assert!(session.open_transactions().contains(TransactionHandle(1)));
    assert!(session.open_transactions().contains(TransactionHandle(2)));
    assert!(connector
        .requests()
        .contains(&Call::Transaction(vec![3, 9, 6, 1])));
    assert!(connector.commits().is_empty());
    assert!(connector.rollbacks().is_empty());

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_commit_removes_handle_after_ack() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let tx = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);

    assert_ok!(session.commit(&tx).await);

    assert_eq!(connector.commits(), vec![tx.handle()]);
    assert!(!session.open_transactions().contains(tx.handle()));
    assert!(session.current_transaction().is_none());
    assert_eq!(session.open_transactions().resolved(), 1);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_resolving_twice_fails_without_round_trip() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let tx = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.rollback(&tx).await);

    let err = assert_err!(session.commit(&tx).await);
    assert!(matches!(err, Error::Transaction(_)));
    let err = assert_err!(session.rollback(&tx).await);
    assert!(matches!(err, Error::Transaction(_)));

    assert!(connector.commits().is_empty());
    assert_eq!(connector.rollbacks(), vec![tx.handle()]);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_foreign_transaction_is_rejected() {
    let connector = MockConnector::new();
    let mut first = assert_ok!(Session::attach(&connector, &config()).await);
    let mut second = assert_ok!(Session::attach(&connector, &config()).await);
    let foreign = assert_ok!(first.begin(IsolationLevel::ReadCommitted).await);
    connector.clear_calls();

    let err = assert_err!(second.commit(&foreign).await);

    assert!(matches!(err, Error::Transaction(_)));
    assert!(err.to_string().contains("belongs to session"));
    assert!(connector.calls().is_empty());

    assert_ok!(first.close().await);
    assert_ok!(second.close().await);
}

#[tokio::test]
async fn test_failed_commit_keeps_handle_open() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let tx = assert_ok!(session.begin(IsolationLevel::RepeatableRead).await);
    connector.inject(Fault::CommitResponse);

    let err = assert_err!(session.commit(&tx).await);

    assert!(matches!(err, Error::Transaction(_)));
    assert!(session.open_transactions().contains(tx.handle()));
    assert_eq!(session.current_transaction(), Some(&tx));

    connector.heal(Fault::CommitResponse);
    assert_ok!(session.close().await);
    assert_eq!(
        connector.rollbacks(),
        vec![TransactionHandle(1), tx.handle()]
    );
}

#[tokio::test]
async fn test_declined_begin_leaves_session_unchanged() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    connector.inject(Fault::TransactionResponse);

    let err = assert_err!(session.begin(IsolationLevel::ReadCommitted).await);

    assert!(matches!(err, Error::Transaction(_)));
    assert_eq!(session.open_transactions().len(), 1);
    assert_eq!(
        session.current_transaction().map(|t| t.handle()),
        Some(TransactionHandle(1))
    );

    connector.heal(Fault::TransactionResponse);
    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_commit_current_and_rollback_current() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &manual_config()).await);

    assert_ok!(session.commit_current().await);
    assert_eq!(connector.commits(), vec![TransactionHandle(1)]);

    let err = assert_err!(session.rollback_current().await);
    assert_eq!(err.to_string(), "transaction error: no active transaction");

    let tx = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.rollback_current().await);
    assert_eq!(connector.rollbacks(), vec![tx.handle()]);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_autocommit_session_renews_default_transaction() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    assert_ok!(session.commit_current().await);
    assert!(session.current_transaction().is_none());
    connector.clear_calls();

    assert_ok!(session.exec("DELETE FROM audit_log", &[]).await);

    let requests = connector.requests();
    assert_eq!(requests[0], Call::Transaction(vec![3, 9, 6, 15, 17, 16]));
    assert_eq!(
        requests[1],
        Call::Prepare {
            sql: "DELETE FROM audit_log".into(),
            transaction: TransactionHandle(2),
        }
    );
    assert_eq!(connector.commits(), vec![TransactionHandle(2)]);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_manual_session_requires_a_transaction() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &manual_config()).await);
    assert_ok!(session.commit_current().await);
    connector.clear_calls();

    let err = assert_err!(session.exec("DELETE FROM audit_log", &[]).await);
    assert_eq!(err.to_string(), "transaction error: no active transaction");
    let err = assert_err!(session.query("SELECT 1 FROM rdb$database", &[]).await);
    assert!(matches!(err, Error::Transaction(_)));
    let err = assert_err!(session.prepare("SELECT 1 FROM rdb$database").await);
    assert!(matches!(err, Error::Transaction(_)));

    assert!(connector.calls().is_empty());

    let tx = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.exec("DELETE FROM audit_log", &[]).await);
    assert!(connector.commits().is_empty());
    assert_ok!(session.commit(&tx).await);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_set_counters_track_lifetime() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);

    let a = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    let _b = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.commit(&a).await);

    let set = session.open_transactions();
    assert_eq!(set.begun(), 3);
    assert_eq!(set.resolved(), 1);
    assert_eq!(set.len(), 2);

    assert_ok!(session.close().await);
}

#[tokio::test]
async fn test_stale_token_rejected_after_handle_reuse() {
    let connector = MockConnector::new();
    let mut session = assert_ok!(Session::attach(&connector, &config()).await);
    let old = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_ok!(session.commit(&old).await);

    connector.reissue_handle(old.handle());
    let new = assert_ok!(session.begin(IsolationLevel::ReadCommitted).await);
    assert_eq!(new.handle(), old.handle());
    assert_ne!(new.serial(), old.serial());
    connector.clear_calls();

    let err = assert_err!(session.commit(&old).await);
    assert!(matches!(err, Error::Transaction(_)));
    let err = assert_err!(session.rollback(&old).await);
    assert!(matches!(err, Error::Transaction(_)));
    assert!(connector.calls().is_empty());
    assert!(session.open_transactions().contains(new.handle()));
    assert_eq!(session.current_transaction(), Some(&new));

    assert_ok!(session.commit(&new).await);
    assert_eq!(connector.commits(), vec![new.handle()]);

    assert_ok!(session.close().await);
}
