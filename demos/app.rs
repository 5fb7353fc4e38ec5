//! Demo application - every control flow primitive in one tree.
//!
//! Run with: cargo run --example app
//!
//! Renders twice. The second pass shows that the failed error boundary keeps
//! rendering its (empty) fallback, so the frame is unchanged and skipped.

use spark_flow::{
    Attr, Component, Content, ErrorBoundary, Match, MountError, RenderError, RenderResult, each,
    element, init_logging, mount_stdout, show, switch, text,
};

fn button_component() -> RenderResult {
    Err(RenderError::failed("ButtonComponent", "error!"))
}

fn app(list: Vec<i32>) -> impl Component {
    let mut boundary = ErrorBoundary::new(button_component).with_label("button");

    move || -> RenderResult {
        let items = each(
            Some(&list),
            Some(|item: &i32, _| Ok(element("div", [text(item.to_string())]))),
            None,
        )?;

        let first = show(
            list.first().copied(),
            Content::producer(|item: i32| Ok(element("div", [text(item.to_string())]))),
            None,
        )?;

        let branch = switch(
            [
                Match::new(true, element("div", [text("hey ho yoyo1")])),
                Match::new(list.first().copied(), element("div", [text("hey ho yoyo2")])),
            ],
            None,
        );

        Ok(element(
            "div",
            [
                element("h1", [text("Hello spark-flow!")]).styled(Attr::BOLD),
                element("p", [text("Start editing to see some magic happen :)")]),
                items,
                first,
                branch,
                boundary.render()?,
            ],
        ))
    }
}

fn main() -> Result<(), MountError> {
    init_logging();

    let mut handle = mount_stdout(app(vec![1, 2, 3, 4, 5]));
    handle.render()?;
    let changed = handle.render()?;
    tracing::info!(changed, passes = handle.render_pass_count(), "demo finished");

    handle.unmount();
    Ok(())
}
