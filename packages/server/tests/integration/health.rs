use crate::common::{TestApp, routes};

#[tokio::test]
async fn status_route_reports_success() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::STATUS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.text, "SUCCESS");
}

#[tokio::test]
async fn root_route_reports_success() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ROOT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.text, "SUCCESS");
}
