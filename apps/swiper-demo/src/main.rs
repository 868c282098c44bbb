mod inbox;

use swiper_core::{ChildDrawEvent, Heading, ItemKey, SwipeItem};
use swiper_graphics::{DrawPrimitive, DrawScopeDefault};

use inbox::{build_swiper, Inbox};

const DENSITY: f32 = 2.0;

/// A scripted gesture: the row it starts on and the raw drag per frame.
struct Script {
    label: &'static str,
    row: usize,
    deltas: &'static [f32],
}

const SCRIPTS: &[Script] = &[
    Script {
        label: "peek and let go",
        row: 0,
        deltas: &[-20.0, -60.0, -40.0],
    },
    Script {
        label: "swipe left to archive",
        row: 0,
        deltas: &[-60.0, -150.0, -260.0],
    },
    Script {
        label: "swipe far left to delete",
        row: 1,
        deltas: &[-200.0, -500.0, -900.0],
    },
    Script {
        label: "swipe right to mark read",
        row: 0,
        deltas: &[100.0, 250.0, 400.0],
    },
];

fn describe(primitives: &[DrawPrimitive]) -> String {
    primitives
        .iter()
        .map(|primitive| match primitive {
            DrawPrimitive::Rect { brush, .. } => format!("bg #{:08X}", brush.color().to_argb()),
            DrawPrimitive::Icon { icon, rect } => format!(
                "icon {} at ({:.0}, {:.0}) {:.0}x{:.0}",
                icon.id.0, rect.x, rect.y, rect.width, rect.height
            ),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swiper Inbox Demo ===");
    println!("Replaying scripted swipes over a headless list");
    println!();

    let inbox = Inbox::with_subjects(&[
        "Quarterly report",
        "Lunch on Friday?",
        "Your order has shipped",
        "Build failed on main",
    ]);
    let mut swiper = match build_swiper(&inbox, DENSITY) {
        Ok(swiper) => swiper,
        Err(err) => {
            log::error!("invalid swipe configuration: {err}");
            return;
        }
    };
    log::info!(
        "swiper configured: {swiper:?}, movement flags {:#06b}",
        swiper.movement_flags().bits()
    );

    for script in SCRIPTS {
        let rows = inbox.rows(DENSITY);
        let Some(row) = rows.get(script.row) else {
            log::warn!("script '{}' targets missing row {}", script.label, script.row);
            continue;
        };
        println!("-- {} (message {})", script.label, row.key());

        let mut scope = DrawScopeDefault::new(row.bounds().size());
        let mut heading = None;
        for &dx in script.deltas {
            scope.clear();
            let offset = swiper.on_child_draw(&mut scope, row, ChildDrawEvent::active(dx));
            if let Some(offset) = offset {
                heading = Heading::from_delta(offset.x);
                println!(
                    "   dx {:>7.1} -> offset {:>7.1}: {}",
                    dx,
                    offset.x,
                    describe(scope.primitives())
                );
            }
        }

        let outcome = swiper.release(row, heading, &mut |key: ItemKey| {
            log::info!("settle message {key}");
        });
        println!("   released: {outcome:?}");
        if outcome.is_committed() {
            // The list rebinds its rows after every committed action.
            swiper.reset();
        }
    }

    println!();
    for message in inbox.messages() {
        println!(
            "[{}{}] {}",
            if message.read { "read" } else { "unread" },
            if message.archived { ", archived" } else { "" },
            message.subject
        );
    }
}
