//! BSM Options CLI
//!
//! Walks through the library: prices a call/put pair, prints Greeks,
//! sweeps PnL surfaces around the contract, then attempts live market
//! data if the network (and a FRED API key) is available.

use bsm_options::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Black-Scholes Option Pricing");
    println!("============================\n");

    let spot = 100.0;
    let strike = 100.0;
    let expiry = 1.0; // 1 year
    let rate = 0.05;
    let vol = 0.20;

    println!("Contract Parameters:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.2} years", expiry);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = OptionContract::new(spot, strike, expiry, rate, vol, OptionType::Call)
        .expect("valid call contract");
    let put = OptionContract::new(spot, strike, expiry, rate, vol, OptionType::Put)
        .expect("valid put contract");

    let call_price = bs_price(&call);
    let put_price = bs_price(&put);

    println!("Option Prices:");
    println!("  Call: ${:.4}", call_price);
    println!("  Put: ${:.4}", put_price);

    for (label, contract) in [("Call", &call), ("Put", &put)] {
        println!("\n{} Greeks:", label);
        for (name, value) in bs_greeks(contract).named() {
            println!("  {}: {:.4}", name, value);
        }
    }

    // PnL scenarios: 11-point grid over +/- 50% of spot and strike,
    // position bought at today's model price
    let num_contracts = 1.0;
    let num_points = 11;
    let spot_bounds = (spot - spot / 2.0, spot + spot / 2.0);
    let strike_bounds = (strike - strike / 2.0, strike + strike / 2.0);

    println!("\nPosition Greeks ({} contracts):", num_contracts);
    for (name, value) in bs_greeks(&call).scale(num_contracts).named() {
        println!("  {}: {:.4}", name, value);
    }

    for (label, base, purchase_price) in
        [("Call", &call, call_price), ("Put", &put, put_price)]
    {
        let surface = match generate_pnl_surface(
            base,
            spot_bounds,
            strike_bounds,
            num_points,
            num_contracts,
            purchase_price,
        ) {
            Ok(surface) => surface,
            Err(e) => {
                eprintln!("Could not generate {label} surface: {e}");
                continue;
            }
        };

        println!("\n{} PnL Surface (rows = spot, cols = strike):", label);
        print!("{:>10}", "");
        for strike in &surface.strikes {
            print!(" {:>8.2}", strike);
        }
        println!();

        for (i, row) in surface.annotations().iter().enumerate() {
            print!("{:>10.2}", surface.spots[i]);
            for cell in row {
                print!(" {:>8}", cell);
            }
            println!();
        }
    }

    // Live data is optional; pricing above works without it
    println!("\n--- Live Data ---");

    let yahoo = YahooClient::new();
    match yahoo.get_quote("AAPL") {
        Ok(quote) => {
            println!("AAPL Quote:");
            println!("  Price: ${:.2}", quote.price);
            println!("  Bid: ${:.2}", quote.bid.unwrap_or(0.0));
            println!("  Ask: ${:.2}", quote.ask.unwrap_or(0.0));

            match price_and_greeks(quote.price, quote.price, expiry, rate, vol, OptionType::Call)
            {
                Ok((live_price, greeks)) => {
                    println!("  ATM call at live spot: ${:.4}", live_price);
                    println!("  Delta: {:.4}", greeks.delta);
                }
                Err(e) => println!("  Could not price at live spot: {e}"),
            }
        }
        Err(e) => {
            println!("Could not fetch AAPL: {e}");
            println!("(This is expected if you're offline or the Yahoo API is unavailable)");
        }
    }

    match FredConfig::from_env() {
        Ok(config) => {
            let fred = FredClient::new(config);
            match fred.fetch_rate(expiry) {
                Ok(live_rate) => {
                    println!("\nFRED risk-free rate ({:.2}y): {:.2}%", expiry, live_rate * 100.0)
                }
                Err(e) => println!("\nCould not fetch FRED rate: {e}"),
            }
        }
        Err(_) => println!("\nFRED_API_KEY not set; using the manual rate above"),
    }

    println!("\n--- Done ---");
}
