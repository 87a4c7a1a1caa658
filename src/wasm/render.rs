use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::{FrameView, InitError, Renderer};

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 position;
uniform mat4 u_model_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;
void main() {
    vec4 mv = u_model_view * vec4(position, 1.0);
    gl_Position = u_projection * mv;
    gl_PointSize = u_size * (u_scale / -mv.z);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 out_color;
void main() {
    out_color = vec4(u_color, u_opacity);
}
"#;

/// Draws the particle buffer as additive-blended points.
pub struct PointRenderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    u_model_view: Option<WebGlUniformLocation>,
    u_projection: Option<WebGlUniformLocation>,
    u_size: Option<WebGlUniformLocation>,
    u_scale: Option<WebGlUniformLocation>,
    u_color: Option<WebGlUniformLocation>,
    u_opacity: Option<WebGlUniformLocation>,
}

impl PointRenderer {
    /// Acquire a WebGL2 context on `canvas` and allocate a vertex buffer for
    /// `count` particles.
    pub fn new(canvas: &HtmlCanvasElement, count: usize) -> Result<Self, InitError> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
        js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)?
            .ok_or(InitError::WebGl2Unsupported)?
            .dyn_into()
            .map_err(|_| InitError::WebGl2Unsupported)?;

        let vs = compile(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link(&gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let vao = gl.create_vertex_array().ok_or(InitError::Buffer)?;
        let buffer = gl.create_buffer().ok_or(InitError::Buffer)?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let byte_len = count
            .checked_mul(3 * std::mem::size_of::<f32>())
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| {
                InitError::InvalidConfig(format!("{count} particles exceed the vertex buffer limit"))
            })?;
        gl.buffer_data_with_i32(GL::ARRAY_BUFFER, byte_len, GL::DYNAMIC_DRAW);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE);
        gl.depth_mask(false);

        let uniform = |name: &str| gl.get_uniform_location(&program, name);
        Ok(Self {
            canvas: canvas.clone(),
            u_model_view: uniform("u_model_view"),
            u_projection: uniform("u_projection"),
            u_size: uniform("u_size"),
            u_scale: uniform("u_scale"),
            u_color: uniform("u_color"),
            u_opacity: uniform("u_opacity"),
            gl,
            program,
            vao,
            buffer,
        })
    }
}

impl Renderer for PointRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn draw(&mut self, frame: &FrameView<'_>) {
        let gl = &self.gl;
        let [r, g, b] = frame.theme.background;
        gl.clear_color(r, g, b, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));
        if frame.positions_dirty {
            gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
            gl.buffer_sub_data_with_i32_and_u8_array(
                GL::ARRAY_BUFFER,
                0,
                frame.position_bytes(),
            );
        }

        let model_view = (frame.view * frame.model).to_cols_array();
        gl.uniform_matrix4fv_with_f32_array(self.u_model_view.as_ref(), false, &model_view);
        gl.uniform_matrix4fv_with_f32_array(
            self.u_projection.as_ref(),
            false,
            &frame.projection.to_cols_array(),
        );
        gl.uniform1f(self.u_size.as_ref(), frame.point_size);
        gl.uniform1f(self.u_scale.as_ref(), frame.surface_height * 0.5);
        let [r, g, b] = frame.theme.accent;
        gl.uniform3f(self.u_color.as_ref(), r, g, b);
        gl.uniform1f(self.u_opacity.as_ref(), frame.opacity);

        gl.draw_arrays(GL::POINTS, 0, (frame.positions.len() / 3) as i32);
        gl.bind_vertex_array(None);
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, InitError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| InitError::Shader("unable to create shader object".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(InitError::Shader(log))
    }
}

fn link(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, InitError> {
    let program = gl
        .create_program()
        .ok_or_else(|| InitError::Program("unable to create program object".into()))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(InitError::Program(log))
    }
}
