use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::inquiry_response::{InquiryListResponse, InquiryResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

pub const DEFAULT_INQUIRY_PAGE_SIZE: u64 = 20;

/// Values that do not parse are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetInquiriesQuery {
    /// NEW, CONTACTED, VIEWING_SCHEDULED, OFFER_MADE, CLOSED or SPAM
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl GetInquiriesQuery {
    pub fn into_parts(self) -> (Option<InquiryStatus>, PageRequest) {
        let parse_num = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse().ok());

        (
            self.status
                .as_deref()
                .and_then(|s| s.trim().parse::<InquiryStatus>().ok()),
            PageRequest::new(
                parse_num(&self.page),
                parse_num(&self.limit),
                DEFAULT_INQUIRY_PAGE_SIZE,
            ),
        )
    }
}

/// List inquiries (admin only)
///
/// Newest first.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = "inquiries",
    params(GetInquiriesQuery),
    responses(
        (status = 200, description = "Page of inquiries", body = inline(SuccessResponse<InquiryListResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/inquiries")]
pub async fn get_inquiries_handler(
    _user: AdminUser,
    query: web::Query<GetInquiriesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (status, page) = query.into_inner().into_parts();

    match data.inquiry.list.execute(status, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(InquiryListResponse {
                inquiries: result.items.into_iter().map(InquiryResponse::from).collect(),
                pagination,
            })
        }
        Err(e) => {
            error!("Failed to list inquiries: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::inquiry::application::ports::incoming::use_cases::{
        ListInquiriesError, ListInquiriesUseCase,
    };
    use crate::modules::inquiry::application::ports::outgoing::InquiryView;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::inquiry_view;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[::core::prelude::v1::test]
    fn test_query_parsing_is_lenient() {
        let query = web::Query::<GetInquiriesQuery>::from_query("status=CLOSED&page=3&limit=x")
            .unwrap()
            .into_inner();
        let (status, page) = query.into_parts();

        assert_eq!(status, Some(InquiryStatus::Closed));
        assert_eq!(page, PageRequest { page: 3, limit: 20 });

        let (status, _) = GetInquiriesQuery {
            status: Some("archived".into()),
            ..Default::default()
        }
        .into_parts();
        assert_eq!(status, None);
    }

    struct MockList;

    #[async_trait]
    impl ListInquiriesUseCase for MockList {
        async fn execute(
            &self,
            status: Option<InquiryStatus>,
            page: PageRequest,
        ) -> Result<PageResult<InquiryView>, ListInquiriesError> {
            let status = status.unwrap_or(InquiryStatus::New);
            Ok(PageResult {
                items: vec![inquiry_view(Uuid::new_v4(), status)],
                page: page.page,
                limit: page.limit,
                total: 1,
            })
        }
    }

    async fn call(role: UserRole, uri: &str) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_list_inquiries(MockList)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_inquiries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer(Uuid::new_v4(), role)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_admin_lists_with_filter() {
        let (status, body) = call(UserRole::Admin, "/api/inquiries?status=SPAM").await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["inquiries"][0]["status"], "SPAM");
        assert_eq!(body["data"]["pagination"]["limit"], 20);
    }

    #[actix_web::test]
    async fn test_realtor_is_forbidden() {
        let (status, _) = call(UserRole::Realtor, "/api/inquiries").await;
        assert_eq!(status, 403);
    }
}
