use std::f64::consts::PI;

use anyhow::{anyhow, Result};
use log::{debug, warn};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{format_money, CategoryBreakdown, ChartHandle, ChartSlot, Entry};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 300;

const SLICE_COLORS: [RGBColor; 7] = [
    RGBColor(255, 99, 132),
    RGBColor(54, 162, 235),
    RGBColor(255, 206, 86),
    RGBColor(75, 192, 192),
    RGBColor(153, 102, 255),
    RGBColor(255, 159, 64),
    RGBColor(201, 203, 207),
];

/// A pie drawn onto a canvas. Releasing it wipes the canvas.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl ChartHandle for CanvasChart {
    fn release(&mut self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if let Some(context) = context {
            context.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    /// Full collection; only expenses are counted
    pub entries: Vec<Entry>,
    pub currency_symbol: String,
}

pub struct CategoryChart {
    canvas_ref: NodeRef,
    slot: ChartSlot<CanvasChart>,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            slot: ChartSlot::new(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        let breakdown = CategoryBreakdown::from_entries(&props.entries);
        let canvas_ref = self.canvas_ref.clone();

        let result = self
            .slot
            .redraw(|| draw_breakdown(&canvas_ref, &breakdown, &props.currency_symbol));
        if let Err(e) = result {
            warn!("Failed to draw category chart: {}", e);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.slot.release();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="card chart-card">
                <strong>{"Category Breakdown"}</strong>
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="category-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

fn draw_breakdown(canvas_ref: &NodeRef, breakdown: &CategoryBreakdown, symbol: &str) -> Result<CanvasChart> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| anyhow!("Chart canvas is not mounted"))?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| anyhow!("Canvas has no 2d context"))?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    if breakdown.is_empty() {
        root.draw(&Text::new(
            "No expenses to chart yet",
            (CANVAS_WIDTH as i32 / 2 - 90, CANVAS_HEIGHT as i32 / 2),
            ("sans-serif", 16).into_font().color(&RGBColor(120, 120, 120)),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
        return Ok(CanvasChart { canvas });
    }

    let center = (150, CANVAS_HEIGHT as i32 / 2);
    let radius = 120.0;
    let total = breakdown.drawable_total();
    let mut start = -PI / 2.0;

    for (i, slice) in breakdown.slices.iter().enumerate() {
        let sweep = slice_sweep(slice.total, total);
        if sweep <= 0.0 {
            continue;
        }
        let points = wedge_points(center, radius, start, start + sweep);
        root.draw(&Polygon::new(points, SLICE_COLORS[i % SLICE_COLORS.len()].filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        start += sweep;
    }

    // Legend on the right, every category listed even at zero
    for (i, slice) in breakdown.slices.iter().enumerate() {
        let y = 30 + i as i32 * 34;
        let color = SLICE_COLORS[i % SLICE_COLORS.len()];
        root.draw(&Rectangle::new([(300, y), (314, y + 14)], color.filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Text::new(
            format!("{} {}", slice.category, format_money(slice.total, symbol)),
            (322, y),
            ("sans-serif", 13).into_font(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    debug!("Drew category chart over {}", format_money(total, symbol));
    Ok(CanvasChart { canvas })
}

/// Angle a slice covers. Zero or negative slices get no wedge.
fn slice_sweep(value: f64, drawable_total: f64) -> f64 {
    if value <= 0.0 || drawable_total <= 0.0 {
        return 0.0;
    }
    value / drawable_total * 2.0 * PI
}

/// Outline of one pie wedge, center first, arc sampled every few degrees
fn wedge_points(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = (((to - from) / (PI / 90.0)).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = from + (to - from) * step as f64 / steps as f64;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}
