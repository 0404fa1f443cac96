use std::sync::Arc;

use driver::database::PostgresDatabase;
use kernel::KernelError;

/// Shared state for every route: the Postgres-backed store behind all of the
/// service traits. Cloning is cheap, the pool is reference-counted.
#[derive(Clone)]
pub struct AppModule(Arc<PostgresDatabase>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;
        Ok(Self(Arc::new(database)))
    }

    pub fn database(&self) -> &PostgresDatabase {
        &self.0
    }
}
