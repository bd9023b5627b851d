use std::io::Write;
use tracing::info;
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest, ListScope};
use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::ItemFormat;

fn print_items<W: Write>(out: &mut W, catalog_service: &dyn CatalogService, scope: ListScope) -> Result<(), CommandError> {
    let res = ListItemsCommand::new(catalog_service).execute(ListItemsCommandRequest::new(scope))?;
    for line in res.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Runs the demonstration script against `catalog_service`, writing the
/// console transcript to `out`.
pub fn run_demo<W: Write>(out: &mut W, catalog_service: &mut dyn CatalogService) -> Result<(), CommandError> {
    info!("starting library demonstration");
    let book = AddItemCommand::new(catalog_service).execute(AddItemCommandRequest::new(
        "Effective Java", 2008, ItemFormat::Book {
            author: "Joshua Bloch".to_string(),
            isbn: "123456789".to_string(),
        }, true))?.item.item_id;
    let _ = AddItemCommand::new(catalog_service).execute(AddItemCommandRequest::new(
        "Inception", 2010, ItemFormat::Dvd {
            director: "Christopher Nolan".to_string(),
            duration_minutes: 148,
        }, true))?;
    let _ = AddItemCommand::new(catalog_service).execute(AddItemCommandRequest::new(
        "National Geographic", 2023, ItemFormat::Magazine { issue_number: 10 }, false))?;

    writeln!(out, "Library Items:")?;
    print_items(out, catalog_service, ListScope::All)?;

    writeln!(out, "\nBorrowing an item:")?;
    let res = BorrowItemCommand::new(catalog_service).execute(BorrowItemCommandRequest::new(book))?;
    writeln!(out, "{}", res.notice())?;

    writeln!(out, "\nBorrowed Items:")?;
    print_items(out, catalog_service, ListScope::Borrowed)?;

    writeln!(out, "\nReturning an item:")?;
    let res = ReturnItemCommand::new(catalog_service).execute(ReturnItemCommandRequest::new(book))?;
    writeln!(out, "{}", res.notice())?;

    writeln!(out, "\nBorrowed Items:")?;
    print_items(out, catalog_service, ListScope::Borrowed)?;
    out.flush()?;
    info!("library demonstration finished");
    Ok(())
}
