use nyc_opendata::SalesClient;

#[tokio::main]
async fn main() {
    let client = SalesClient::new();
    let listings = client.fetch_sales(4, 20).await.unwrap();

    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{}: {} ({}) - {}",
            i,
            listing.address,
            listing.neighborhood.as_deref().unwrap_or("unknown"),
            listing
                .price
                .map(|p| format!("${}", p))
                .unwrap_or_else(|| "N/A".to_string()),
        );
    }
}
