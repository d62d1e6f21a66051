use sms_transaction_rs::{ExtractorBuilder, group_by_month};
use std::env;

const SAMPLE_BACKUP: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<smses count="5">
    <sms date="1728950400000" body="Spent Rs. 250 at BigBazaar using your debit card" />
    <sms date="1730419200000" body="credited with Rs 12,000 salary to A/c XX1234" />
    <sms date="1731062400000" body="Rs.500 debited from A/c XX1234 via UPI to merchant@ybl" />
    <sms date="1731066000000" body="You have received INR 2,000.00 in your account" />
    <sms date="1733011200000" body="paid ₹1,199.00 to shop@okgoogle via UPI" />
</smses>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let content = if args.len() > 1 {
        std::fs::read_to_string(&args[1])?
    } else {
        println!("Using embedded sample backup\n");
        SAMPLE_BACKUP.to_string()
    };

    let report = ExtractorBuilder::new().content(&content).extract()?;
    let monthly = group_by_month(&report.transactions);

    for group in &monthly {
        println!("{}", group.month);
        println!("  credit: {}", group.total_credit);
        println!("  debit:  {}", group.total_debit);
        for txn in &group.transactions {
            println!("    {} {} via {}", txn.txn_type, txn.amount, txn.mode);
        }
        println!();
    }

    Ok(())
}
