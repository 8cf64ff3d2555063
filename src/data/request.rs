//! Request repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    error::AppError,
    model::request::{CreateRequestParam, Request, RequestState},
};

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request in the Pending state.
    pub async fn create(&self, param: CreateRequestParam) -> Result<Request, AppError> {
        let entity = entity::request::ActiveModel {
            initiator_id: ActiveValue::Set(param.initiator_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            description: ActiveValue::Set(param.description),
            state: ActiveValue::Set(RequestState::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Request::from_entity(entity)
    }

    pub async fn find_by_message_id(&self, message_id: u64) -> Result<Option<Request>, AppError> {
        let entity = entity::prelude::Request::find()
            .filter(entity::request::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Request::from_entity).transpose()
    }

    /// Finds the request currently being worked on, if any.
    pub async fn find_active(&self) -> Result<Option<Request>, AppError> {
        let entity = entity::prelude::Request::find()
            .filter(entity::request::Column::State.eq(RequestState::Active))
            .one(self.db)
            .await?;

        entity.map(Request::from_entity).transpose()
    }

    /// Moves a request from `from` to `to`.
    ///
    /// The update only matches while the stored state is still `from`, so a
    /// concurrent transition of the same request makes this one a no-op.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The updated request
    /// - `Ok(None)` - No request with that ID is in state `from`
    /// - `Err(AppError)` - Database error
    pub async fn update_state(
        &self,
        id: i32,
        from: RequestState,
        to: RequestState,
    ) -> Result<Option<Request>, AppError> {
        let result = entity::prelude::Request::update_many()
            .filter(entity::request::Column::Id.eq(id))
            .filter(entity::request::Column::State.eq(from))
            .col_expr(
                entity::request::Column::State,
                sea_orm::sea_query::Expr::value(to),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let entity = entity::prelude::Request::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Request {} not found", id)))?;

        Request::from_entity(entity).map(Some)
    }
}
