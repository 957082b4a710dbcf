use fridgeplan::Session;
use fridgeplan::memory::MemoryBackend;
use fridgeplan::seed;
use fridgeplan_ingredient::{Ingredient, IngredientInput, IngredientPatch};
use fridgeplan_shared::{Error, backend::Backend};
use fridgeplan_shopping::{ShoppingItem, ShoppingItemInput};

mod helpers;

fn milk() -> IngredientInput {
    IngredientInput {
        name: "두유".to_owned(),
        quantity: 1.0,
        unit: "팩".to_owned(),
        expiry_date: "2025-02-01".to_owned(),
        category: "dairy".to_owned(),
    }
}

#[tokio::test]
async fn test_ingredient_changes_reach_backend() -> anyhow::Result<()> {
    let backend = MemoryBackend::<Ingredient>::new();
    let mut session = Session::<Ingredient, _>::load(backend, helpers::USER).await?;
    assert!(session.items().is_empty());

    session.create(milk()).await?;
    let id = session.items()[0].id.to_owned();
    assert_eq!(session.items()[0].user_id, helpers::USER);
    assert_eq!(session.backend().list(helpers::USER).await?, session.items());

    session
        .update(
            &id,
            IngredientPatch {
                quantity: Some(3.0),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(session.backend().list(helpers::USER).await?[0].quantity, 3.0);

    session.delete(&id).await?;
    assert!(session.items().is_empty());
    assert!(session.backend().list(helpers::USER).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_input_changes_nothing() -> anyhow::Result<()> {
    let backend =
        MemoryBackend::with_items(helpers::USER, seed::ingredients(helpers::USER, helpers::now()));
    let mut session = Session::<Ingredient, _>::load(backend, helpers::USER).await?;

    let mut input = milk();
    input.expiry_date = "2025-02-30".to_owned();
    let error = session.create(input).await.unwrap_err();

    assert_eq!(error.invalid_fields(), vec!["expiry_date".to_owned()]);
    assert_eq!(session.items().len(), 4);
    assert_eq!(session.backend().list(helpers::USER).await?.len(), 4);

    let error = session
        .update("missing", IngredientPatch::default())
        .await
        .unwrap_err();
    assert!(error.is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_shopping_toggle_and_clear_sync() -> anyhow::Result<()> {
    let backend = MemoryBackend::with_items(helpers::USER, seed::shopping_items());
    let mut session = Session::<ShoppingItem, _>::load(backend, helpers::USER).await?;

    session.toggle("1").await?;
    session.clear_completed().await?;

    let ids = session
        .items()
        .iter()
        .map(|item| item.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["2", "4", "5"]);
    assert_eq!(session.backend().list(helpers::USER).await?, session.items());

    Ok(())
}

#[tokio::test]
async fn test_backend_failure_keeps_local_change() -> anyhow::Result<()> {
    let mut session =
        Session::<ShoppingItem, _>::load(helpers::FailingBackend::default(), helpers::USER).await?;

    let error = session
        .create(ShoppingItemInput {
            name: "쌀".to_owned(),
            quantity: 1.0,
            unit: "kg".to_owned(),
            category: "grain".to_owned(),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Backend(_)));
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].name, "쌀");
    assert_eq!(session.backend().writes(), 1);

    let id = session.items()[0].id.to_owned();
    assert!(session.toggle(&id).await.is_err());
    assert!(session.items()[0].is_completed);

    Ok(())
}

#[tokio::test]
async fn test_load_rejects_invalid_records() -> anyhow::Result<()> {
    let mut items = seed::shopping_items();
    items[0].quantity = -1.0;
    let backend = MemoryBackend::with_items(helpers::USER, items);

    let error = Session::<ShoppingItem, _>::load(backend, helpers::USER)
        .await
        .err()
        .unwrap();

    assert_eq!(error.invalid_fields(), vec!["quantity"]);

    Ok(())
}
