mod routes;
pub mod test_helpers;

use anyhow::Result;
use tokio::net::TcpListener;

pub async fn serve(listener: TcpListener) -> Result<()> {
    let app = routes::build_router(routes::app_state());
    axum::serve(listener, app).await?;
    Ok(())
}
