use sms_transaction_rs::ExtractorBuilder;
use std::env;

const SAMPLE_BACKUP: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<smses count="4">
    <sms address="VM-SBIINB" date="1731062400000"
         body="Rs.500 debited from A/c XX1234 via UPI to merchant@ybl on 08-11-24" />
    <sms address="AX-HDFCBK" date="1731066000000"
         body="You have received INR 2,000.00 in your account, ref no 12345" />
    <sms address="JM-PAYTMB" date="1731070000000"
         body="Your payment of Rs 99 via Paytm has failed" />
    <sms address="AM-NETFLX" date="1731073600000"
         body="Your OTP for login is 482910. Do not share it with anyone." />
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

    println!("{}\n", report.summary());

    for (i, txn) in report.transactions.iter().enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Date: {}", txn.date.as_str());
        println!("  Amount: {}", txn.amount);
        println!("  Type: {}", txn.txn_type);
        println!("  Mode: {}", txn.mode);
        println!("  Status: {}", txn.status);
        println!();
    }

    Ok(())
}
