use api_data::model::{NotePayload, NoteResponse};
use rocket::response::status::{Created, NoContent};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Build, Rocket, State};
use tinynotes::storage::NoteStorage;
use uuid::Uuid;

use crate::app_constants::API_PREFIX;
use crate::routes::api::errors::ApiError;

pub mod errors;

#[get("/notes")]
async fn list_notes(
    storage: &State<NoteStorage>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = storage.list_notes().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[get("/notes/<id>")]
async fn get_note(
    storage: &State<NoteStorage>,
    id: Uuid,
) -> Result<Json<NoteResponse>, ApiError> {
    Ok(Json(storage.read_note(id).await?.into()))
}

#[post("/notes", data = "<payload>")]
async fn create_note(
    storage: &State<NoteStorage>,
    payload: Json<NotePayload>,
) -> Result<Created<Json<NoteResponse>>, ApiError> {
    let note = storage.create_note(&payload.body).await?;
    let location = format!("{API_PREFIX}/notes/{}", note.id);
    Ok(Created::new(location).body(Json(note.into())))
}

#[put("/notes/<id>", data = "<payload>")]
async fn update_note(
    storage: &State<NoteStorage>,
    id: Uuid,
    payload: Json<NotePayload>,
) -> Result<Json<NoteResponse>, ApiError> {
    Ok(Json(storage.update_note(id, &payload.body).await?.into()))
}

#[delete("/notes/<id>")]
async fn delete_note(
    storage: &State<NoteStorage>,
    id: Uuid,
) -> Result<NoContent, ApiError> {
    storage.delete_note(id).await?;
    Ok(NoContent)
}

pub trait ApiRocketBuildExt {
    fn install_notes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notes_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    list_notes,
                    get_note,
                    create_note,
                    update_note,
                    delete_note,
                ]
            )
    }
}
