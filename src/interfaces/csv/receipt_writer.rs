use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ReceiptRow<'a> {
    customer_id: &'a str,
    customer_name: &'a str,
    car_id: &'a str,
    car_name: &'a str,
    amount: &'a str,
    due_date: &'a str,
}

impl<'a> From<&'a Transaction> for ReceiptRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            customer_id: &tx.customer.id,
            customer_name: &tx.customer.name,
            car_id: &tx.car.id,
            car_name: &tx.car.name,
            amount: &tx.amount,
            due_date: &tx.due_date,
        }
    }
}

/// Writes rental receipts as CSV rows, header first.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipt(&mut self, tx: &Transaction) -> Result<()> {
        self.writer.serialize(ReceiptRow::from(tx))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
