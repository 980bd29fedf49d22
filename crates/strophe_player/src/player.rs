//! The staged playback walker
//!
//! Walks a segment tree depth-first, left to right, committing one surface
//! node per entry and suspending for the configured delay before each
//! commit. A call is one fresh traversal with no state carried between
//! calls; the returned future resolves only after the last entry of the
//! whole tree has been appended.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use strophe_core::{Entry, LeafSegment, Segment};
use strophe_surface::{Surface, SurfaceNode, TextNode};
use tokio::time::sleep;

use crate::error::Result;

/// Play a segment tree onto a surface
///
/// Renders one node per flattened entry, in strict depth-first child order —
/// no sibling interleaving, no parallel timers. Awaiting the returned future
/// is the completion signal; callers chain poem sections by awaiting one
/// play before starting the next. A surface failure aborts the run and
/// propagates; the nodes committed before it remain on the surface.
pub async fn play<S>(segment: &Segment, surface: &mut S) -> Result<()>
where
    S: Surface + Send,
{
    play_segment(segment, surface).await
}

/// Recursive step, boxed so the async walker can call itself
fn play_segment<'a, S>(
    segment: &'a Segment,
    surface: &'a mut S,
) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
where
    S: Surface + Send,
{
    Box::pin(async move {
        match segment {
            Segment::Parent(children) => {
                tracing::debug!("Playing parent segment with {} children", children.len());
                for child in children {
                    play_segment(child, surface).await?;
                }
                Ok(())
            }
            Segment::Leaf(leaf) => play_leaf(leaf, surface).await,
        }
    })
}

async fn play_leaf<S>(leaf: &LeafSegment, surface: &mut S) -> Result<()>
where
    S: Surface + Send,
{
    tracing::debug!("Playing leaf segment with {} entries", leaf.len());

    for (index, entry) in leaf.values().iter().enumerate() {
        let style = leaf.style_for(index);
        let delay_ms = entry_delay_ms(leaf, index, entry);
        if delay_ms > 0 {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
        }

        match entry {
            Entry::Break(kind) => {
                tracing::trace!("Committing {:?} break as line terminator", kind);
                surface.append(SurfaceNode::line_break())?;
            }
            Entry::Text(text) => {
                let mut node = TextNode::new(text.clone());
                if let Some(transition) = leaf.enter_transition() {
                    node.set_enter_transition(transition);
                }
                for (name, value) in style.iter() {
                    if value.is_empty() {
                        continue;
                    }
                    node.set_style_property(name, value);
                }
                tracing::trace!("Committing text entry {}: {:?}", index, text);
                surface.append(node.into())?;
            }
        }
    }

    Ok(())
}

/// Effective pre-commit delay for one entry
///
/// Break markers commit immediately regardless of configured delays. Entry 0
/// folds the one-shot `before_all_delay` on top of `before_each_delay`.
fn entry_delay_ms(leaf: &LeafSegment, index: usize, entry: &Entry) -> u32 {
    if entry.is_break() {
        return 0;
    }
    let mut delay_ms = leaf.before_each_delay_ms();
    if index == 0 {
        delay_ms += leaf.before_all_delay_ms();
    }
    delay_ms
}
