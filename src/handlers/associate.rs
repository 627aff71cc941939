use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::errors::AppError;
use crate::models::associate::{AssociateFilter, AssociatePatch, NewAssociate};
use crate::service::AssociateService;
use crate::utils::date::parse_hire_date;
use crate::utils::form::{non_blank, optional_id, required_id};
use crate::views::{ListingPage, LookupResultsPage};

const LISTING_PATH: &str = "/associates";

#[derive(Deserialize)]
pub struct LookupForm {
    id: Option<String>,
    name: Option<String>,
    manager: Option<String>,
    department: Option<String>,
}

impl TryFrom<LookupForm> for AssociateFilter {
    type Error = AppError;

    fn try_from(form: LookupForm) -> Result<Self, Self::Error> {
        Ok(AssociateFilter {
            id: optional_id(form.id)?,
            name: non_blank(form.name),
            manager: non_blank(form.manager),
            department: non_blank(form.department),
        })
    }
}

#[derive(Deserialize)]
pub struct CreateForm {
    name: Option<String>,
    hire_date: Option<String>,
    manager: Option<String>,
    department: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}

impl TryFrom<CreateForm> for NewAssociate {
    type Error = AppError;

    fn try_from(form: CreateForm) -> Result<Self, Self::Error> {
        let hire_date = required(form.hire_date, "hire_date")?;
        Ok(NewAssociate {
            name: required(form.name, "name")?,
            hire_date: parse_hire_date(&hire_date)?,
            manager: required(form.manager, "manager")?,
            department: required(form.department, "department")?,
        })
    }
}

#[derive(Deserialize)]
pub struct DeleteForm {
    id: Option<String>,
}

#[derive(Deserialize)]
pub struct EditForm {
    id: Option<String>,
    name: Option<String>,
    hire_date: Option<String>,
    manager: Option<String>,
    department: Option<String>,
}

impl EditForm {
    fn into_parts(self) -> Result<(i32, AssociatePatch), AppError> {
        let id = required_id(self.id)?;
        let hire_date = non_blank(self.hire_date)
            .map(|raw| parse_hire_date(&raw))
            .transpose()?;
        Ok((
            id,
            AssociatePatch {
                name: non_blank(self.name),
                hire_date,
                manager: non_blank(self.manager),
                department: non_blank(self.department),
            },
        ))
    }
}

fn redirect_to_listing() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LISTING_PATH))
        .finish()
}

pub async fn lookup_associate(
    service: web::Data<AssociateService>,
    form: web::Form<LookupForm>,
) -> Result<HttpResponse, AppError> {
    let filter = AssociateFilter::try_from(form.into_inner())?;
    let associates = service.lookup(&filter).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LookupResultsPage { associates: &associates }.to_string()))
}

pub async fn get_associates(
    service: web::Data<AssociateService>,
) -> Result<HttpResponse, AppError> {
    let groups = service.grouped().await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ListingPage { groups: &groups }.to_string()))
}

pub async fn create_associate(
    service: web::Data<AssociateService>,
    form: web::Form<CreateForm>,
) -> Result<HttpResponse, AppError> {
    let new_associate = NewAssociate::try_from(form.into_inner())?;
    service.create(&new_associate).await?;
    Ok(redirect_to_listing())
}

pub async fn delete_associate(
    service: web::Data<AssociateService>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    let id = required_id(form.into_inner().id)?;
    service.delete(id).await?;
    Ok(redirect_to_listing())
}

pub async fn edit_associate(
    service: web::Data<AssociateService>,
    form: web::Form<EditForm>,
) -> Result<HttpResponse, AppError> {
    let (id, patch) = form.into_inner().into_parts()?;
    service.update(id, &patch).await?;
    Ok(redirect_to_listing())
}
