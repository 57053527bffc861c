///  To run :
///  cargo r --example kiosk_runner
use cafe_types::domain::beverage::Beverage;
use cafe_types::domain::kiosk::CafeKiosk;

fn main() -> anyhow::Result<()> {
    let mut kiosk = CafeKiosk::new();

    kiosk.add(Beverage::Latte, 1)?;
    println!("Added a {} to the kiosk.", Beverage::Latte);

    kiosk.add(Beverage::Americano, 1)?;
    println!("Added an {} to the kiosk.", Beverage::Americano);

    println!("Total price: {}", kiosk.calculate_total_price());

    match kiosk.create_order() {
        Ok(order) => println!(
            "Order placed at {} with {} beverage(s).",
            order.ordered_at(),
            order.beverages().len()
        ),
        Err(err) => println!("Could not place order: {err}"),
    }
    Ok(())
}
