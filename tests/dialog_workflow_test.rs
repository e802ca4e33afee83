use product_dialog::catalog::{refresh_channel, CatalogEvent, RefreshReceiver};
use product_dialog::dialog::{
    CloseReason, ProductDialog, RejectReason, SubmitOutcome, CREATED, GENERIC_ERROR,
};
use product_dialog::gateway::StoreGateway;
use product_dialog::model::{DialogMode, Field, Product, ProductId};
use product_dialog::notify::{Notification, Placement, RecordingNotifier};
use product_dialog::store::mock::{create_mock_store, next_create, next_update, MockStore};
use product_dialog::store::{StoreClient, StoreError};
use product_dialog::validation::rules::TITLE_REQUIRED;

type TestDialog = ProductDialog<StoreGateway, RecordingNotifier>;

fn dialog_for(client: StoreClient<Product>) -> (TestDialog, RecordingNotifier, RefreshReceiver) {
    let notifier = RecordingNotifier::new();
    let (signal, receiver) = refresh_channel();
    let dialog = ProductDialog::new(StoreGateway::new(client), notifier.clone(), signal);
    (dialog, notifier, receiver)
}

fn product(id: u64, title: &str) -> Product {
    Product::new(id, title, 20.0, "Running shoe", "footwear", "https://img/shoe.png")
}

#[tokio::test]
async fn test_empty_title_shows_error_and_disables_save() {
    let mock = MockStore::<Product>::new();
    let (mut dialog, notifier, mut receiver) = dialog_for(mock.client());

    dialog.open(product(0, "Shoe"), DialogMode::CreateOrUpdate, None);
    assert!(dialog.can_submit());

    dialog.change(Field::Title, "");
    // Not touched yet: the error exists but is not shown.
    assert_eq!(dialog.form().unwrap().error(Field::Title), Some(TITLE_REQUIRED));
    assert_eq!(dialog.form().unwrap().visible_error(Field::Title), None);

    dialog.blur(Field::Title);
    assert_eq!(
        dialog.form().unwrap().visible_error(Field::Title),
        Some(TITLE_REQUIRED)
    );
    assert!(!dialog.can_submit());

    let outcome = dialog.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Rejected(RejectReason::Invalid(_))));
    assert!(notifier.notifications().is_empty());
    assert_eq!(receiver.try_recv(), None);
    mock.verify();
}

#[tokio::test]
async fn test_create_closes_dialog_and_requests_reload() {
    let (client, mut requests) = create_mock_store::<Product>(8);
    let (mut dialog, notifier, mut receiver) = dialog_for(client);

    let backend = tokio::spawn(async move {
        let (fields, respond_to) = next_create(&mut requests).await.expect("create request");
        assert_eq!(fields.title, "Shoe");
        assert_eq!(fields.price, 20.0);
        let stored = Product::from_fields(ProductId(21), fields);
        respond_to.send(Ok(stored.clone())).unwrap();
        stored
    });

    dialog.open(Product::draft(), DialogMode::CreateOrUpdate, Some("Nuevo".into()));
    dialog.change(Field::Title, "Shoe");
    dialog.change(Field::Price, "20");
    dialog.change(Field::Description, "Running shoe");
    dialog.change(Field::Category, "footwear");
    dialog.change(Field::Image, "https://img/shoe.png");

    let outcome = dialog.submit().await;
    let stored = backend.await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Created(stored));
    assert!(!dialog.is_visible());
    assert_eq!(
        notifier.notifications(),
        vec![Notification::Success {
            message: CREATED.into(),
            placement: Placement::TopCenter,
        }]
    );
    assert_eq!(receiver.try_recv(), Some(CatalogEvent::ReloadRequested));
    assert_eq!(receiver.try_recv(), None);
}

#[tokio::test]
async fn test_failed_delete_keeps_dialog_open() {
    let mut mock = MockStore::<Product>::new();
    mock.expect_delete(ProductId(5)).return_err(StoreError::NotFound("5".into()));
    let (mut dialog, notifier, mut receiver) = dialog_for(mock.client());

    dialog.open(product(5, "Shoe"), DialogMode::Delete, Some("Borrar".into()));
    let outcome = dialog.confirm_delete().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(dialog.is_visible());
    assert_eq!(dialog.mode(), DialogMode::Delete);
    assert_eq!(dialog.draft().unwrap().id, ProductId(5));
    assert_eq!(
        notifier.notifications(),
        vec![Notification::Error {
            message: GENERIC_ERROR.into()
        }]
    );
    assert_eq!(receiver.try_recv(), None);
    mock.verify();
}

#[tokio::test]
async fn test_failed_update_keeps_edits() {
    let mut mock = MockStore::<Product>::new();
    mock.expect_update(ProductId(7)).return_err(StoreError::ActorClosed);
    let (mut dialog, notifier, mut receiver) = dialog_for(mock.client());

    dialog.open(product(7, "Shoe"), DialogMode::CreateOrUpdate, None);
    dialog.change(Field::Title, "Boot");
    assert_eq!(dialog.submit().await, SubmitOutcome::Failed);

    assert!(dialog.is_visible());
    assert_eq!(dialog.form().unwrap().value(Field::Title), "Boot");
    assert!(notifier.last().unwrap().is_error());
    assert_eq!(receiver.try_recv(), None);

    // A retry goes out with the same edits.
    let stored = product(7, "Boot");
    mock.expect_update(ProductId(7)).return_ok(stored.clone());
    assert_eq!(dialog.submit().await, SubmitOutcome::Updated(stored));
    assert!(!dialog.is_visible());
    assert_eq!(receiver.try_recv(), Some(CatalogEvent::ReloadRequested));
    mock.verify();
}

#[tokio::test]
async fn test_new_id_creates_and_never_updates() {
    let mut mock = MockStore::<Product>::new();
    mock.expect_create().return_ok(product(1, "Shoe"));
    let (mut dialog, _, _) = dialog_for(mock.client());

    dialog.open(product(0, "Shoe"), DialogMode::CreateOrUpdate, None);
    assert!(matches!(dialog.submit().await, SubmitOutcome::Created(_)));
    mock.verify();
}

#[tokio::test]
async fn test_id_edits_never_retarget_the_submit() {
    let mut mock = MockStore::<Product>::new();
    mock.expect_update(ProductId(5)).return_ok(product(5, "Shoe"));
    let (mut dialog, _, _) = dialog_for(mock.client());

    dialog.open(product(5, "Shoe"), DialogMode::CreateOrUpdate, None);
    assert!(!dialog.change(Field::Id, ""));
    assert!(!dialog.change(Field::Id, "9"));
    assert_eq!(dialog.form().unwrap().value(Field::Id), "5");

    assert_eq!(dialog.submit().await, SubmitOutcome::Updated(product(5, "Shoe")));
    mock.verify();
}

#[tokio::test]
async fn test_existing_id_updates_that_id() {
    let (client, mut requests) = create_mock_store::<Product>(8);
    let (mut dialog, _, _) = dialog_for(client);

    let backend = tokio::spawn(async move {
        let (id, update, respond_to) = next_update(&mut requests).await.expect("update request");
        let stored = Product::from_fields(id, update);
        respond_to.send(Ok(stored.clone())).unwrap();
        stored
    });

    dialog.open(product(9, "Shoe"), DialogMode::CreateOrUpdate, None);
    dialog.change(Field::Price, "35.5");
    let outcome = dialog.submit().await;
    let stored = backend.await.unwrap();

    assert_eq!(stored.id, ProductId(9));
    assert_eq!(stored.price, 35.5);
    assert_eq!(outcome, SubmitOutcome::Updated(stored));
}

#[tokio::test]
async fn test_cancel_makes_no_calls() {
    let mock = MockStore::<Product>::new();
    let (mut dialog, notifier, mut receiver) = dialog_for(mock.client());

    dialog.open(product(3, "Shoe"), DialogMode::Delete, None);
    dialog.close(CloseReason::HeaderClose);
    assert!(!dialog.is_visible());
    assert_eq!(
        dialog.confirm_delete().await,
        SubmitOutcome::Rejected(RejectReason::Closed)
    );

    assert!(notifier.notifications().is_empty());
    assert_eq!(receiver.try_recv(), None);
    mock.verify();
}
