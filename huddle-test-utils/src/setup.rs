//! Shorthand macros for building a `TestContext` with tables.

/// Build a `TestContext` with tables created for the provided entities.
///
/// Evaluates to `Result<TestContext, TestError>`.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let context = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            context.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(context)
        }.await
    }};
}

/// Build a `TestContext` with the users, events, rsvps and comments tables.
#[macro_export]
macro_rules! test_setup_with_event_tables {
    () => {{
        $crate::TestBuilder::new().with_event_tables().build().await
    }};
}
