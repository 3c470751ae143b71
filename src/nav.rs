//! Navigation route table for the console frontend.
//!
//! DESIGN
//! ======
//! One descriptor per feature area, merged into a single tree ordered by
//! `meta.rank` and built exactly once at startup. The source of truth is
//! this table — there is no per-module registration side effect, so sibling
//! ordering and path uniqueness are decided in one place. Duplicated legacy
//! declarations for the upload/labeling/YOLO areas were collapsed to one
//! canonical descriptor per path.

use std::sync::OnceLock;

use serde::Serialize;

// =============================================================================
// DESCRIPTORS
// =============================================================================

/// Menu presentation for a route. `rank` orders top-level siblings; children
/// inherit their position from declaration order and carry no rank.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMeta {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

/// A navigable path, its menu presentation, and its child paths.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

/// A feature area: a top-level route redirecting to its single index child.
fn feature(
    path: &'static str,
    index: &'static str,
    name: &'static str,
    title: &'static str,
    rank: u32,
    icon: &'static str,
) -> RouteDescriptor {
    RouteDescriptor {
        path,
        redirect: Some(index),
        name: None,
        meta: RouteMeta { title, rank: Some(rank), icon: Some(icon) },
        children: vec![RouteDescriptor {
            path: index,
            redirect: None,
            name: Some(name),
            meta: RouteMeta { title, rank: None, icon: None },
            children: Vec::new(),
        }],
    }
}

// =============================================================================
// THE TABLE
// =============================================================================

fn build_navigation() -> Vec<RouteDescriptor> {
    let mut routes = vec![
        feature("/filesUpload", "/filesUpload/index", "FilesUpload", "File Upload", 1, "ri/upload-cloud-2-line"),
        feature("/labelimgs", "/labelimgs/index", "Labelimgs", "Image Labeling", 2, "ri/price-tag-3-line"),
        feature("/modelTrain", "/modelTrain/index", "ModelTrain", "Model Training", 3, "ri/settings-3-line"),
        feature("/yoloTrain", "/yoloTrain/index", "YoloTrain", "YOLO Training", 4, "ri/rocket-line"),
        feature("/modelVal", "/modelVal/index", "ModelVal", "Model Validation", 5, "ri/chat-check-line"),
        feature("/filesDetect", "/filesDetect/index", "FilesDetect", "File Detection", 6, "ri/file-search-line"),
        feature("/cameraDetect", "/cameraDetect/index", "CameraDetect", "Camera Detection", 7, "ri/camera-line"),
        feature("/videoDetect", "/videoDetect/index", "VideoDetect", "Live Detection", 8, "ri/live-line"),
        feature("/videoDetect2", "/videoDetect2/index", "VideoDetect2", "Video Detection", 9, "ri/video-line"),
    ];
    routes.sort_by_key(|r| r.meta.rank);
    routes
}

/// The full navigation tree, rank-ordered, built once.
pub fn navigation() -> &'static [RouteDescriptor] {
    static NAVIGATION: OnceLock<Vec<RouteDescriptor>> = OnceLock::new();
    NAVIGATION.get_or_init(build_navigation)
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
