use axum::{response::Html, Json};
use serde_json::{json, Value};

use crate::TITLE;

const DESCRIPTION: &str = "API that provides grade-specific explanations.

## Quick Links
- **Interactive API Documentation (Swagger UI)**: [/docs](/docs)
- **Alternative API Documentation (ReDoc)**: [/redoc](/redoc)

## Overview
This API provides explanations tailored for both Grade 2 and Grade 5 students in a single response.
Simply send your question, and get back two age-appropriate explanations!";

pub fn openapi_document() -> Value {
    let grade_response = json!({
        "type": "object",
        "required": ["grade", "explanation"],
        "properties": {
            "grade": {"type": "integer"},
            "explanation": {"type": "string"}
        }
    });
    let error = json!({
        "type": "object",
        "required": ["detail"],
        "properties": {"detail": {"type": "string"}}
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": TITLE,
            "description": DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Root",
                    "description": "Returns API information.",
                    "responses": {"200": {"description": "Service description"}}
                }
            },
            "/explain/": {
                "post": {
                    "summary": "Get Explanations",
                    "description": "Get explanations for both grade levels (2 and 5) for a given question.",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/QuestionRequest"}}}
                    },
                    "responses": {
                        "200": {
                            "description": "Responses for both Grade 2 and Grade 5 levels",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CombinedResponse"}}}
                        },
                        "422": {
                            "description": "Validation Error",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}
                        },
                        "500": {
                            "description": "Configuration or completion error",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "QuestionRequest": {
                    "type": "object",
                    "required": ["question"],
                    "properties": {"question": {"type": "string"}},
                    "example": {"question": "How does photosynthesis work?"}
                },
                "GradeResponse": grade_response,
                "CombinedResponse": {
                    "type": "object",
                    "required": ["question", "grade2_response", "grade5_response"],
                    "properties": {
                        "question": {"type": "string"},
                        "grade2_response": {"$ref": "#/components/schemas/GradeResponse"},
                        "grade5_response": {"$ref": "#/components/schemas/GradeResponse"}
                    }
                },
                "Error": error
            }
        }
    })
}

pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
<title>{TITLE} - Swagger UI</title>
<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>SwaggerUIBundle({{ url: "/openapi.json", dom_id: "#swagger-ui" }});</script>
</body>
</html>"##
    ))
}

pub async fn redoc() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{TITLE} - ReDoc</title>
</head>
<body>
<redoc spec-url="/openapi.json"></redoc>
<script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>"#
    ))
}
