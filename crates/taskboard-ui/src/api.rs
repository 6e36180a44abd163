use std::rc::Rc;

use gloo::net::http::{
  Request,
  Response
};
use serde::de::DeserializeOwned;
use taskboard_shared::config::ClientConfig;
use taskboard_shared::filter::{
  ListView,
  TaskFilter
};
use taskboard_shared::{
  ApiError,
  DeleteAck,
  Stats,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch
};

/// Thin REST client. Every call is a
/// single request; failures come back as
/// `ApiError` and are never retried.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
  config: Rc<ClientConfig>
}

impl ApiClient {
  pub fn new(
    config: Rc<ClientConfig>
  ) -> Self {
    Self { config }
  }

  pub async fn list_tasks(
    &self,
    view: ListView,
    filter: &TaskFilter
  ) -> Result<Vec<TaskDto>, ApiError> {
    let url =
      self.config.endpoint(view.endpoint());
    let pairs = filter.query_pairs();
    tracing::debug!(%url, ?pairs, "GET task list");

    let sent = Request::get(&url)
      .query(pairs)
      .send()
      .await;
    decode(sent).await
  }

  pub async fn create_task(
    &self,
    payload: &TaskCreate
  ) -> Result<TaskDto, ApiError> {
    let url =
      self.config.endpoint("/api/tasks");
    let request = Request::post(&url)
      .json(payload)
      .map_err(|e| {
        ApiError::Encode(e.to_string())
      })?;
    decode(request.send().await).await
  }

  pub async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, ApiError> {
    let url = self
      .config
      .endpoint(&format!("/api/tasks/{id}"));
    let request = Request::put(&url)
      .json(patch)
      .map_err(|e| {
        ApiError::Encode(e.to_string())
      })?;
    decode(request.send().await).await
  }

  pub async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<DeleteAck, ApiError> {
    let url = self
      .config
      .endpoint(&format!("/api/tasks/{id}"));
    decode(
      Request::delete(&url).send().await
    )
    .await
  }

  pub async fn fetch_stats(
    &self
  ) -> Result<Stats, ApiError> {
    let url =
      self.config.endpoint("/api/stats");
    decode(Request::get(&url).send().await)
      .await
  }
}

async fn decode<R>(
  sent: Result<Response, gloo::net::Error>
) -> Result<R, ApiError>
where
  R: DeserializeOwned
{
  let response = sent.map_err(|e| {
    ApiError::Network(e.to_string())
  })?;

  if !response.ok() {
    let status = response.status();
    let body = response
      .text()
      .await
      .unwrap_or_default();
    return Err(ApiError::Status {
      status,
      body
    });
  }

  response.json::<R>().await.map_err(|e| {
    ApiError::Decode(e.to_string())
  })
}
