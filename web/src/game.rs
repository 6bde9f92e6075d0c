use clap::Args;
use junban_core as game;
use web_time::Instant;
use yew::prelude::*;

use crate::scheduler::TimeoutScheduler;
use crate::surface::ViewSurface;
use crate::utils::js_random_seed;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    PanelClicked(game::PanelIndex),
    Tick(game::TickId),
}

#[derive(Properties, Clone, PartialEq)]
struct PanelProps {
    index: game::PanelIndex,
    text: AttrValue,
    pressed: bool,
    callback: Callback<game::PanelIndex>,
}

#[function_component(PanelCell)]
fn panel_component(props: &PanelProps) -> Html {
    let PanelProps {
        index,
        text,
        pressed,
        callback,
    } = props.clone();

    let class = classes!("panel", pressed.then_some("pressed"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("panel {} clicked", index);
        callback.emit(index);
    });

    html! {
        <li {class} {onclick}>{text}</li>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub(crate) type Session = game::Game<ViewSurface, TimeoutScheduler>;

pub(crate) struct GameView {
    game: Session,
}

impl GameView {
    fn handle(&mut self, msg: Msg, now: Instant) -> bool {
        use Msg::*;

        match msg {
            Start => {
                log::debug!("start requested");
                self.game.start(now);
                true
            }
            PanelClicked(index) => match self.game.click(index, now) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("click on panel {}: {}", index, err);
                    false
                }
            },
            Tick(id) => self.game.tick(id, now).has_update(),
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let config = game::GameConfig::new(seed);
        let scheduler = TimeoutScheduler::new(ctx.link().clone());

        Self {
            game: game::Game::new(config, ViewSurface::default(), scheduler),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.handle(msg, Instant::now())
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = self.game.display();
        let state_class = match self.game.state() {
            game::RoundState::Idle => "not-started",
            game::RoundState::Running => "in-progress",
            game::RoundState::Complete => "complete",
        };

        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::Start);

        html! {
            <div class={classes!("junban", state_class)}>
                <div id="timer">{display.timer_text().to_string()}</div>
                <ul id="board">
                    {
                        // surface handles are created in board order, so they double as panel indices
                        for display.panels().iter().enumerate().map(|(index, panel)| {
                            let callback = ctx.link().callback(Msg::PanelClicked);
                            html! {
                                <PanelCell
                                    {index}
                                    text={AttrValue::from(panel.text.clone())}
                                    pressed={panel.pressed}
                                    {callback}
                                />
                            }
                        })
                    }
                </ul>
                <div id="btn" onclick={cb_start}>{"START"}</div>
            </div>
        }
    }
}
